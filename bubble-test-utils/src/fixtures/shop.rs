use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, PaymentStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PRODUCT_PRICE, error::TestError, TestContext};

static ORDER_SEQUENCE: AtomicU32 = AtomicU32::new(1);

impl TestContext {
    pub fn shop(&self) -> ShopFixtures<'_> {
        ShopFixtures { test: self }
    }
}

pub struct ShopFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ShopFixtures<'a> {
    /// Insert a product in the `general` category priced at [`TEST_PRODUCT_PRICE`].
    pub async fn insert_product(
        &self,
        name: &str,
        stock: i32,
    ) -> Result<entity::shop_product::Model, TestError> {
        self.insert_product_with(name, "general", TEST_PRODUCT_PRICE, stock)
            .await
    }

    pub async fn insert_product_with(
        &self,
        name: &str,
        category: &str,
        price: f64,
        stock: i32,
    ) -> Result<entity::shop_product::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ShopProduct::insert(entity::shop_product::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("{} description", name)),
                price: ActiveValue::Set(price),
                image_url: ActiveValue::Set(None),
                category: ActiveValue::Set(category.to_string()),
                stock: ActiveValue::Set(stock),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_cart(&self, user_id: i32) -> Result<entity::shop_cart::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ShopCart::insert(entity::shop_cart::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a cart item snapshotting the product's name, price and image.
    pub async fn insert_cart_item(
        &self,
        cart_id: i32,
        product: &entity::shop_product::Model,
        quantity: i32,
    ) -> Result<entity::shop_cart_item::Model, TestError> {
        Ok(
            entity::prelude::ShopCartItem::insert(entity::shop_cart_item::ActiveModel {
                cart_id: ActiveValue::Set(cart_id),
                product_id: ActiveValue::Set(product.id),
                name: ActiveValue::Set(product.name.clone()),
                price: ActiveValue::Set(product.price),
                image_url: ActiveValue::Set(product.image_url.clone()),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert an order with one item per `(product, quantity)` pair.
    ///
    /// Product stock is left untouched; the order is assumed to have already
    /// reserved it.
    pub async fn insert_order(
        &self,
        user_id: i32,
        status: OrderStatus,
        items: &[(&entity::shop_product::Model, i32)],
    ) -> Result<entity::shop_order::Model, TestError> {
        let now = Utc::now().naive_utc();
        let total_price = items
            .iter()
            .map(|(product, quantity)| product.price * f64::from(*quantity))
            .sum();

        let order = entity::prelude::ShopOrder::insert(entity::shop_order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            order_number: ActiveValue::Set(format!(
                "ORD-TEST-{}",
                ORDER_SEQUENCE.fetch_add(1, Ordering::Relaxed)
            )),
            total_price: ActiveValue::Set(total_price),
            status: ActiveValue::Set(status),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_method: ActiveValue::Set("CREDIT_CARD".to_string()),
            shipping_full_name: ActiveValue::Set("Test Customer".to_string()),
            shipping_address_line1: ActiveValue::Set("1 Test Street".to_string()),
            shipping_address_line2: ActiveValue::Set(None),
            shipping_city: ActiveValue::Set("Testville".to_string()),
            shipping_state: ActiveValue::Set("TS".to_string()),
            shipping_postal_code: ActiveValue::Set("12345".to_string()),
            shipping_country: ActiveValue::Set("Testland".to_string()),
            shipping_phone_number: ActiveValue::Set("5550100".to_string()),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?;

        for (product, quantity) in items {
            entity::prelude::ShopOrderItem::insert(entity::shop_order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(product.id),
                name: ActiveValue::Set(product.name.clone()),
                price: ActiveValue::Set(product.price),
                image_url: ActiveValue::Set(product.image_url.clone()),
                quantity: ActiveValue::Set(*quantity),
                subtotal: ActiveValue::Set(product.price * f64::from(*quantity)),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?;
        }

        Ok(order)
    }
}
