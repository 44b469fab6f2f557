//! Order placement and lifecycle.
//!
//! Orders are created from the caller's cart. Stock moves only inside database
//! transactions: checkout reserves stock for every line with a conditional decrement and
//! cancellation returns it, so a failure part way leaves products, cart and orders as
//! they were.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, PaymentStatus};
use rand::Rng;
use sea_orm::{
    ActiveEnum, ConnectionTrait, DatabaseConnection, DatabaseTransaction, Iterable,
    TransactionTrait,
};

use crate::{
    model::{
        api::PaginatedDto,
        order::{
            CreateOrderDto, OrderDto, OrderItemDto, OrderQueryDto, OrderStatisticsDto,
            ShippingAddressDto, UpdateOrderStatusDto, UpdatePaymentStatusDto,
        },
    },
    server::{
        data::{
            cart::CartRepository,
            order::{NewOrder, OrderFilter, OrderRepository, OrderSort},
            product::ProductRepository,
        },
        error::{order::OrderError, validation::ValidationError, Error},
        model::{
            auth::AuthUser,
            db::{OrderItemModel, OrderModel},
        },
        service::product::parse_direction,
        util::{
            time::{end_of_day, start_of_day},
            validation::Validator,
        },
    },
};

const DEFAULT_PAYMENT_METHOD: &str = "CREDIT_CARD";
const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for everything in the user's cart.
    ///
    /// Stock is reserved for each line, the order and its items are written and the cart
    /// is emptied in a single transaction. Any failure rolls all of it back.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - Order placed with status PENDING
    /// - `Err(Error::ValidationError)` - Shipping address, payment method or notes invalid
    /// - `Err(Error::OrderError(EmptyCart))` - No cart or no items
    /// - `Err(Error::OrderError(ProductGone | InsufficientStock))` - A line cannot be filled
    pub async fn create_order(
        &self,
        user_id: i32,
        payload: CreateOrderDto,
    ) -> Result<OrderDto, Error> {
        let payment_method = payload
            .payment_method
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_PAYMENT_METHOD)
            .to_string();
        let notes = payload
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let mut validator = Validator::new();
        validate_shipping(&mut validator, &payload.shipping_address);
        validator.check(
            payment_method.chars().count() >= 2,
            "paymentMethod",
            "Payment method must be at least 2 characters",
        );
        if let Some(notes) = &notes {
            validator.length("notes", notes, 0, 500);
        }
        validator.finish()?;

        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);
        let cart = cart_repo
            .get_by_user(user_id)
            .await?
            .ok_or(OrderError::EmptyCart)?;
        let cart_items = cart_repo.items(cart.id).await?;
        if cart_items.is_empty() {
            return Err(OrderError::EmptyCart.into());
        }

        let product_repo = ProductRepository::new(&txn);
        for item in &cart_items {
            let product = product_repo
                .get(item.product_id)
                .await?
                .ok_or(OrderError::ProductGone(item.product_id))?;

            if !product_repo.reserve_stock(product.id, item.quantity).await? {
                return Err(OrderError::InsufficientStock {
                    name: product.name,
                    available: product.stock,
                    requested: item.quantity,
                }
                .into());
            }
        }

        let total_price = cart_items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();

        let order_repo = OrderRepository::new(&txn);
        let order = order_repo
            .create(NewOrder {
                user_id,
                order_number: order_number(),
                total_price,
                payment_method,
                shipping: &payload.shipping_address,
                notes,
            })
            .await?;

        let mut items = Vec::with_capacity(cart_items.len());
        for item in &cart_items {
            items.push(order_repo.add_item(order.id, item).await?);
        }

        cart_repo.clear(cart.id).await?;
        cart_repo.touch(cart).await?;

        txn.commit().await?;

        tracing::info!(
            "Order {} ({}) created for user {} with {} items",
            order.id,
            order.order_number,
            user_id,
            items.len()
        );

        Ok(order_dto(order, items))
    }

    /// Lists orders visible to the caller, administrators see every user's orders.
    pub async fn list_orders(
        &self,
        user: AuthUser,
        query: OrderQueryDto,
    ) -> Result<PaginatedDto<OrderDto>, Error> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let sort = match query.sort_by.as_deref() {
            None | Some("createdAt") => OrderSort::CreatedAt,
            Some("totalPrice") => OrderSort::TotalPrice,
            Some("status") => OrderSort::Status,
            Some(_) => {
                return Err(ValidationError::field(
                    "sortBy",
                    "Must be one of createdAt, totalPrice, status",
                )
                .into())
            }
        };

        let filter = OrderFilter {
            user_id: (!user.is_admin()).then_some(user.id),
            status: query
                .status
                .as_deref()
                .map(|status| parse_order_status("status", status))
                .transpose()?,
            created_from: query
                .start_date
                .as_deref()
                .map(|date| start_of_day("startDate", date))
                .transpose()?,
            created_to: query
                .end_date
                .as_deref()
                .map(|date| end_of_day("endDate", date))
                .transpose()?,
            sort,
            order: parse_direction(query.sort_direction.as_deref())?,
        };

        let (orders, total) = OrderRepository::new(self.db)
            .list(&filter, page, limit)
            .await?;
        let orders = with_items(self.db, orders).await?;

        Ok(PaginatedDto::new(orders, total, page, limit))
    }

    /// Counts the user's orders per status and sums what was spent on orders that were
    /// not cancelled. Every status appears in the breakdown, with zero if unused.
    pub async fn statistics(&self, user_id: i32) -> Result<OrderStatisticsDto, Error> {
        let totals = OrderRepository::new(self.db).status_totals(user_id).await?;

        let mut orders_by_status: BTreeMap<String, u64> =
            OrderStatus::iter().map(|status| (status.to_value(), 0)).collect();
        let mut total_spent = 0.0;

        for (status, total_price) in &totals {
            *orders_by_status.entry(status.to_value()).or_default() += 1;
            if *status != OrderStatus::Cancelled {
                total_spent += total_price;
            }
        }

        Ok(OrderStatisticsDto {
            total_orders: totals.len() as u64,
            total_spent,
            orders_by_status,
        })
    }

    /// Gets an order, only its owner or an administrator may see it.
    pub async fn get_order(&self, user: AuthUser, order_id: i32) -> Result<OrderDto, Error> {
        let order = self.find(order_id).await?;

        if order.user_id != user.id && !user.is_admin() {
            return Err(OrderError::NotOwner(order_id).into());
        }

        let items = OrderRepository::new(self.db)
            .items_for_orders(&[order.id])
            .await?;

        Ok(order_dto(order, items))
    }

    /// Sets the fulfilment status of an order.
    ///
    /// Cancelled and delivered orders are final. Moving an order to CANCELLED returns
    /// its stock.
    pub async fn update_status(
        &self,
        order_id: i32,
        payload: UpdateOrderStatusDto,
    ) -> Result<OrderDto, Error> {
        let status = parse_order_status("status", &payload.status)?;

        let txn = self.db.begin().await?;

        let order = find_order(&txn, order_id).await?;
        let is_final = matches!(order.status, OrderStatus::Cancelled | OrderStatus::Delivered);
        if is_final && order.status != status {
            return Err(OrderError::InvalidTransition {
                from: order.status.to_value(),
                to: status.to_value(),
            }
            .into());
        }

        let order = transition(&txn, order, Some(status), None).await?;

        txn.commit().await?;

        tracing::info!("Order {} status updated to {}", order.id, order.status.to_value());

        self.load(order).await
    }

    /// Sets the payment status of an order.
    ///
    /// PAID moves a PENDING order to PROCESSING. REFUNDED cancels any order that was not
    /// delivered, returning its stock.
    pub async fn update_payment_status(
        &self,
        order_id: i32,
        payload: UpdatePaymentStatusDto,
    ) -> Result<OrderDto, Error> {
        let payment_status = PaymentStatus::try_from_value(&payload.payment_status)
            .map_err(|_| {
                ValidationError::field("paymentStatus", "Must be one of PENDING, PAID, REFUNDED")
            })?;

        let txn = self.db.begin().await?;

        let order = find_order(&txn, order_id).await?;
        let status = match payment_status {
            PaymentStatus::Paid if order.status == OrderStatus::Pending => {
                Some(OrderStatus::Processing)
            }
            PaymentStatus::Refunded if order.status != OrderStatus::Delivered => {
                Some(OrderStatus::Cancelled)
            }
            _ => None,
        };

        let order = transition(&txn, order, status, Some(payment_status)).await?;

        txn.commit().await?;

        tracing::info!(
            "Order {} payment status updated to {}",
            order.id,
            order.payment_status.to_value()
        );

        self.load(order).await
    }

    /// Cancels the caller's own PENDING or PROCESSING order and returns its stock.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - Order cancelled
    /// - `Err(Error::OrderError(NotFound))` - No such order
    /// - `Err(Error::OrderError(NotOwner))` - Order belongs to someone else
    /// - `Err(Error::OrderError(NotCancellable))` - Order already shipped, delivered or
    ///   cancelled
    pub async fn cancel_order(&self, user_id: i32, order_id: i32) -> Result<OrderDto, Error> {
        let txn = self.db.begin().await?;

        let order = find_order(&txn, order_id).await?;
        if order.user_id != user_id {
            return Err(OrderError::NotOwner(order_id).into());
        }
        if !matches!(order.status, OrderStatus::Pending | OrderStatus::Processing) {
            return Err(OrderError::NotCancellable(order.status.to_value()).into());
        }

        let order = transition(&txn, order, Some(OrderStatus::Cancelled), None).await?;

        txn.commit().await?;

        tracing::info!("Order {} cancelled by user {}", order.id, user_id);

        self.load(order).await
    }

    async fn find(&self, order_id: i32) -> Result<OrderModel, Error> {
        find_order(self.db, order_id).await
    }

    async fn load(&self, order: OrderModel) -> Result<OrderDto, Error> {
        let items = OrderRepository::new(self.db)
            .items_for_orders(&[order.id])
            .await?;

        Ok(order_dto(order, items))
    }
}

async fn find_order<C: ConnectionTrait>(db: &C, order_id: i32) -> Result<OrderModel, Error> {
    OrderRepository::new(db)
        .get(order_id)
        .await?
        .ok_or_else(|| OrderError::NotFound(order_id).into())
}

/// Writes new statuses, returning stock when the order becomes CANCELLED.
async fn transition(
    txn: &DatabaseTransaction,
    order: OrderModel,
    status: Option<OrderStatus>,
    payment_status: Option<PaymentStatus>,
) -> Result<OrderModel, Error> {
    let cancelling =
        status == Some(OrderStatus::Cancelled) && order.status != OrderStatus::Cancelled;

    if cancelling {
        let product_repo = ProductRepository::new(txn);
        for item in OrderRepository::new(txn)
            .items_for_orders(&[order.id])
            .await?
        {
            if product_repo
                .restore_stock(item.product_id, item.quantity)
                .await?
            {
                tracing::info!(
                    "Returned {} units of product {} to stock from order {}",
                    item.quantity,
                    item.product_id,
                    order.id
                );
            } else {
                tracing::warn!(
                    "Product {} from order {} no longer exists, stock not returned",
                    item.product_id,
                    order.id
                );
            }
        }
    }

    Ok(OrderRepository::new(txn)
        .set_status(order, status, payment_status)
        .await?)
}

async fn with_items<C: ConnectionTrait>(
    db: &C,
    orders: Vec<OrderModel>,
) -> Result<Vec<OrderDto>, Error> {
    let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();

    let mut items: HashMap<i32, Vec<OrderItemModel>> = HashMap::new();
    for item in OrderRepository::new(db)
        .items_for_orders(&order_ids)
        .await?
    {
        items.entry(item.order_id).or_default().push(item);
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let order_items = items.remove(&order.id).unwrap_or_default();
            order_dto(order, order_items)
        })
        .collect())
}

fn order_dto(order: OrderModel, items: Vec<OrderItemModel>) -> OrderDto {
    OrderDto {
        id: order.id,
        order_number: order.order_number,
        user_id: order.user_id,
        total_price: order.total_price,
        status: order.status.into(),
        payment_status: order.payment_status.into(),
        payment_method: order.payment_method,
        shipping_address: ShippingAddressDto {
            full_name: order.shipping_full_name,
            address_line1: order.shipping_address_line1,
            address_line2: order.shipping_address_line2,
            city: order.shipping_city,
            state: order.shipping_state,
            postal_code: order.shipping_postal_code,
            country: order.shipping_country,
            phone_number: order.shipping_phone_number,
        },
        notes: order.notes,
        items: items.into_iter().map(OrderItemDto::from).collect(),
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

fn validate_shipping(validator: &mut Validator, address: &ShippingAddressDto) {
    validator
        .length("shippingAddress.fullName", address.full_name.trim(), 2, 100)
        .length("shippingAddress.addressLine1", address.address_line1.trim(), 5, 100)
        .length("shippingAddress.city", address.city.trim(), 2, 50)
        .length("shippingAddress.state", address.state.trim(), 2, 50)
        .length("shippingAddress.postalCode", address.postal_code.trim(), 3, 20)
        .length("shippingAddress.country", address.country.trim(), 2, 50)
        .length("shippingAddress.phoneNumber", address.phone_number.trim(), 5, 20);

    if let Some(line2) = &address.address_line2 {
        validator.length("shippingAddress.addressLine2", line2, 0, 100);
    }
}

fn parse_order_status(field: &str, value: &str) -> Result<OrderStatus, ValidationError> {
    OrderStatus::try_from_value(&value.to_string()).map_err(|_| {
        ValidationError::field(
            field,
            "Must be one of PENDING, PROCESSING, SHIPPED, DELIVERED, CANCELLED",
        )
    })
}

/// `ORD-<unix millis>-<0..999>`
fn order_number() -> String {
    format!(
        "ORD-{}-{}",
        Utc::now().timestamp_millis(),
        rand::rng().random_range(0..1000)
    )
}
