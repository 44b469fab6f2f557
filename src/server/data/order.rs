use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{OrderStatus, PaymentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::order::ShippingAddressDto;

/// Column an order listing can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderSort {
    #[default]
    CreatedAt,
    TotalPrice,
    Status,
}

impl OrderSort {
    fn column(self) -> entity::shop_order::Column {
        match self {
            Self::CreatedAt => entity::shop_order::Column::CreatedAt,
            Self::TotalPrice => entity::shop_order::Column::TotalPrice,
            Self::Status => entity::shop_order::Column::Status,
        }
    }
}

/// Filters for [`OrderRepository::list`], `None` fields are not applied.
#[derive(Clone, Debug)]
pub struct OrderFilter {
    pub user_id: Option<i32>,
    pub status: Option<OrderStatus>,
    /// Inclusive lower bound on `created_at`
    pub created_from: Option<NaiveDateTime>,
    /// Inclusive upper bound on `created_at`
    pub created_to: Option<NaiveDateTime>,
    pub sort: OrderSort,
    pub order: Order,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            user_id: None,
            status: None,
            created_from: None,
            created_to: None,
            sort: OrderSort::default(),
            order: Order::Desc,
        }
    }
}

/// Fields of an order row that are decided at checkout.
pub struct NewOrder<'a> {
    pub user_id: i32,
    pub order_number: String,
    pub total_price: f64,
    pub payment_method: String,
    pub shipping: &'a ShippingAddressDto,
    pub notes: Option<String>,
}

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a PENDING order with a PENDING payment
    pub async fn create(&self, order: NewOrder<'_>) -> Result<entity::shop_order::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let shipping = order.shipping;
        let order = entity::shop_order::ActiveModel {
            user_id: ActiveValue::Set(order.user_id),
            order_number: ActiveValue::Set(order.order_number),
            total_price: ActiveValue::Set(order.total_price),
            status: ActiveValue::Set(OrderStatus::Pending),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_method: ActiveValue::Set(order.payment_method),
            shipping_full_name: ActiveValue::Set(shipping.full_name.clone()),
            shipping_address_line1: ActiveValue::Set(shipping.address_line1.clone()),
            shipping_address_line2: ActiveValue::Set(shipping.address_line2.clone()),
            shipping_city: ActiveValue::Set(shipping.city.clone()),
            shipping_state: ActiveValue::Set(shipping.state.clone()),
            shipping_postal_code: ActiveValue::Set(shipping.postal_code.clone()),
            shipping_country: ActiveValue::Set(shipping.country.clone()),
            shipping_phone_number: ActiveValue::Set(shipping.phone_number.clone()),
            notes: ActiveValue::Set(order.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    /// Adds an order line copied from a cart item
    pub async fn add_item(
        &self,
        order_id: i32,
        item: &entity::shop_cart_item::Model,
    ) -> Result<entity::shop_order_item::Model, DbErr> {
        let order_item = entity::shop_order_item::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            product_id: ActiveValue::Set(item.product_id),
            name: ActiveValue::Set(item.name.clone()),
            price: ActiveValue::Set(item.price),
            image_url: ActiveValue::Set(item.image_url.clone()),
            quantity: ActiveValue::Set(item.quantity),
            subtotal: ActiveValue::Set(item.price * f64::from(item.quantity)),
            ..Default::default()
        };

        order_item.insert(self.db).await
    }

    pub async fn get(&self, order_id: i32) -> Result<Option<entity::shop_order::Model>, DbErr> {
        entity::prelude::ShopOrder::find_by_id(order_id)
            .one(self.db)
            .await
    }

    /// Items of the given orders, ordered by order then by line
    pub async fn items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<entity::shop_order_item::Model>, DbErr> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ShopOrderItem::find()
            .filter(entity::shop_order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::shop_order_item::Column::OrderId)
            .order_by_asc(entity::shop_order_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets one page of orders matching `filter` along with the total match count
    pub async fn list(
        &self,
        filter: &OrderFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::shop_order::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(user_id) = filter.user_id {
            condition = condition.add(entity::shop_order::Column::UserId.eq(user_id));
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::shop_order::Column::Status.eq(status));
        }
        if let Some(from) = filter.created_from {
            condition = condition.add(entity::shop_order::Column::CreatedAt.gte(from));
        }
        if let Some(to) = filter.created_to {
            condition = condition.add(entity::shop_order::Column::CreatedAt.lte(to));
        }

        let query = entity::prelude::ShopOrder::find().filter(condition);
        let total = query.clone().count(self.db).await?;

        let orders = query
            .order_by(filter.sort.column(), filter.order.clone())
            .order_by(entity::shop_order::Column::Id, filter.order.clone())
            .offset(super::page_offset(page, limit))
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((orders, total))
    }

    /// Status and total of every order placed by a user
    pub async fn status_totals(&self, user_id: i32) -> Result<Vec<(OrderStatus, f64)>, DbErr> {
        entity::prelude::ShopOrder::find()
            .select_only()
            .column(entity::shop_order::Column::Status)
            .column(entity::shop_order::Column::TotalPrice)
            .filter(entity::shop_order::Column::UserId.eq(user_id))
            .into_tuple::<(OrderStatus, f64)>()
            .all(self.db)
            .await
    }

    /// Writes new statuses, `None` leaves that status unchanged
    pub async fn set_status(
        &self,
        order: entity::shop_order::Model,
        status: Option<OrderStatus>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<entity::shop_order::Model, DbErr> {
        let mut order_am = order.into_active_model();
        if let Some(status) = status {
            order_am.status = ActiveValue::Set(status);
        }
        if let Some(payment_status) = payment_status {
            order_am.payment_status = ActiveValue::Set(payment_status);
        }
        order_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        order_am.update(self.db).await
    }
}
