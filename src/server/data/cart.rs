use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    /// Creates a new instance of [`CartRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Option<entity::shop_cart::Model>, DbErr> {
        entity::prelude::ShopCart::find()
            .filter(entity::shop_cart::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets the user's cart, creating an empty one if they have none
    pub async fn get_or_create(&self, user_id: i32) -> Result<entity::shop_cart::Model, DbErr> {
        if let Some(cart) = self.get_by_user(user_id).await? {
            return Ok(cart);
        }

        let now = Utc::now().naive_utc();
        let cart = entity::shop_cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        cart.insert(self.db).await
    }

    /// Items of a cart in the order they were added
    pub async fn items(&self, cart_id: i32) -> Result<Vec<entity::shop_cart_item::Model>, DbErr> {
        entity::prelude::ShopCartItem::find()
            .filter(entity::shop_cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(entity::shop_cart_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds an item by ID, only if it belongs to `cart_id`
    pub async fn find_item(
        &self,
        cart_id: i32,
        item_id: i32,
    ) -> Result<Option<entity::shop_cart_item::Model>, DbErr> {
        entity::prelude::ShopCartItem::find_by_id(item_id)
            .filter(entity::shop_cart_item::Column::CartId.eq(cart_id))
            .one(self.db)
            .await
    }

    pub async fn find_item_by_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<entity::shop_cart_item::Model>, DbErr> {
        entity::prelude::ShopCartItem::find()
            .filter(entity::shop_cart_item::Column::CartId.eq(cart_id))
            .filter(entity::shop_cart_item::Column::ProductId.eq(product_id))
            .one(self.db)
            .await
    }

    /// Adds a product line, copying the product's name, price and image
    pub async fn add_item(
        &self,
        cart_id: i32,
        product: &entity::shop_product::Model,
        quantity: i32,
    ) -> Result<entity::shop_cart_item::Model, DbErr> {
        let item = entity::shop_cart_item::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            product_id: ActiveValue::Set(product.id),
            name: ActiveValue::Set(product.name.clone()),
            price: ActiveValue::Set(product.price),
            image_url: ActiveValue::Set(product.image_url.clone()),
            quantity: ActiveValue::Set(quantity),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn set_item_quantity(
        &self,
        item: entity::shop_cart_item::Model,
        quantity: i32,
    ) -> Result<entity::shop_cart_item::Model, DbErr> {
        let mut item_am = item.into_active_model();
        item_am.quantity = ActiveValue::Set(quantity);

        item_am.update(self.db).await
    }

    pub async fn delete_item(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShopCartItem::delete_by_id(item_id)
            .exec(self.db)
            .await
    }

    /// Removes every item from a cart
    pub async fn clear(&self, cart_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShopCartItem::delete_many()
            .filter(entity::shop_cart_item::Column::CartId.eq(cart_id))
            .exec(self.db)
            .await
    }

    /// Sets the cart's `updated_at` to now
    pub async fn touch(&self, cart: entity::shop_cart::Model) -> Result<entity::shop_cart::Model, DbErr> {
        let mut cart_am = cart.into_active_model();
        cart_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        cart_am.update(self.db).await
    }
}
