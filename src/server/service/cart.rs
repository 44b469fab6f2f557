use std::collections::BTreeMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::cart::{AddCartItemDto, CartDto, CartItemDto, SyncCartDto, UpdateCartItemDto},
    server::{
        data::{cart::CartRepository, product::ProductRepository},
        error::{cart::CartError, validation::ValidationError, Error},
        model::db::CartModel,
    },
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    /// Creates a new instance of [`CartService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's cart, creating an empty one on first access.
    pub async fn get_cart(&self, user_id: i32) -> Result<CartDto, Error> {
        let cart = CartRepository::new(self.db).get_or_create(user_id).await?;

        cart_dto(self.db, cart).await
    }

    /// Adds a product to the cart, merging with an existing line for the same product.
    ///
    /// Stock must cover the merged quantity. The cart is left untouched when any check
    /// fails.
    pub async fn add_item(&self, user_id: i32, payload: AddCartItemDto) -> Result<CartDto, Error> {
        let product_id = payload
            .product_id
            .ok_or_else(|| ValidationError::field("productId", "Product ID is required"))?;
        if payload.quantity < 1 {
            return Err(ValidationError::field("quantity", "Quantity must be at least 1").into());
        }

        let product = ProductRepository::new(self.db)
            .get(product_id)
            .await?
            .ok_or(CartError::ProductNotFound(product_id))?;

        let cart_repo = CartRepository::new(self.db);
        let existing = match cart_repo.get_by_user(user_id).await? {
            Some(cart) => cart_repo.find_item_by_product(cart.id, product_id).await?,
            None => None,
        };

        let in_cart = existing.as_ref().map(|item| item.quantity).unwrap_or_default();
        let requested = in_cart.saturating_add(payload.quantity);
        if in_cart.checked_add(payload.quantity).is_none() || product.stock < requested {
            return Err(CartError::InsufficientStock {
                product_id,
                available: product.stock,
                requested,
            }
            .into());
        }

        let cart = cart_repo.get_or_create(user_id).await?;
        match existing {
            Some(item) => {
                cart_repo.set_item_quantity(item, requested).await?;
            }
            None => {
                cart_repo.add_item(cart.id, &product, requested).await?;
            }
        }
        let cart = cart_repo.touch(cart).await?;

        cart_dto(self.db, cart).await
    }

    /// Sets the quantity of a line in the user's cart.
    pub async fn update_item(
        &self,
        user_id: i32,
        item_id: i32,
        payload: UpdateCartItemDto,
    ) -> Result<CartDto, Error> {
        if payload.quantity < 1 {
            return Err(ValidationError::field("quantity", "Quantity must be at least 1").into());
        }

        let cart_repo = CartRepository::new(self.db);
        let cart = cart_repo
            .get_by_user(user_id)
            .await?
            .ok_or(CartError::ItemNotFound(item_id))?;
        let item = cart_repo
            .find_item(cart.id, item_id)
            .await?
            .ok_or(CartError::ItemNotFound(item_id))?;

        let product = ProductRepository::new(self.db)
            .get(item.product_id)
            .await?
            .ok_or(CartError::ProductNotFound(item.product_id))?;
        if product.stock < payload.quantity {
            return Err(CartError::InsufficientStock {
                product_id: product.id,
                available: product.stock,
                requested: payload.quantity,
            }
            .into());
        }

        cart_repo.set_item_quantity(item, payload.quantity).await?;
        let cart = cart_repo.touch(cart).await?;

        cart_dto(self.db, cart).await
    }

    pub async fn remove_item(&self, user_id: i32, item_id: i32) -> Result<CartDto, Error> {
        let cart_repo = CartRepository::new(self.db);
        let cart = cart_repo
            .get_by_user(user_id)
            .await?
            .ok_or(CartError::ItemNotFound(item_id))?;

        if cart_repo.find_item(cart.id, item_id).await?.is_none() {
            return Err(CartError::ItemNotFound(item_id).into());
        }

        cart_repo.delete_item(item_id).await?;
        let cart = cart_repo.touch(cart).await?;

        cart_dto(self.db, cart).await
    }

    /// Removes every line from the user's cart.
    pub async fn clear_cart(&self, user_id: i32) -> Result<CartDto, Error> {
        let cart_repo = CartRepository::new(self.db);
        let cart = cart_repo
            .get_by_user(user_id)
            .await?
            .ok_or(CartError::CartNotFound(user_id))?;

        cart_repo.clear(cart.id).await?;
        let cart = cart_repo.touch(cart).await?;

        cart_dto(self.db, cart).await
    }

    /// Replaces the cart with a client-side copy.
    ///
    /// Quantities for the same product are summed and clamped to stock. Unknown
    /// products, products out of stock and non-positive quantities are skipped.
    pub async fn sync_cart(&self, user_id: i32, payload: SyncCartDto) -> Result<CartDto, Error> {
        let mut wanted: BTreeMap<i32, i32> = BTreeMap::new();
        for item in payload.items.iter().filter(|item| item.quantity > 0) {
            let quantity = wanted.entry(item.product_id).or_default();
            *quantity = quantity.saturating_add(item.quantity);
        }

        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);
        let product_repo = ProductRepository::new(&txn);
        let cart = cart_repo.get_or_create(user_id).await?;
        cart_repo.clear(cart.id).await?;

        for (product_id, quantity) in wanted {
            let Some(product) = product_repo.get(product_id).await? else {
                tracing::warn!(
                    "Skipping unknown product {} while syncing cart of user {}",
                    product_id,
                    user_id
                );
                continue;
            };

            if product.stock < 1 {
                tracing::warn!(
                    "Skipping out of stock product {} while syncing cart of user {}",
                    product_id,
                    user_id
                );
                continue;
            }

            cart_repo
                .add_item(cart.id, &product, quantity.min(product.stock))
                .await?;
        }

        let cart = cart_repo.touch(cart).await?;

        txn.commit().await?;

        cart_dto(self.db, cart).await
    }
}

async fn cart_dto<C: ConnectionTrait>(db: &C, cart: CartModel) -> Result<CartDto, Error> {
    let items: Vec<CartItemDto> = CartRepository::new(db)
        .items(cart.id)
        .await?
        .into_iter()
        .map(CartItemDto::from)
        .collect();

    let total_price = items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();

    Ok(CartDto {
        id: cart.id,
        user_id: cart.user_id,
        items,
        total_price,
        created_at: cart.created_at,
        updated_at: cart.updated_at,
    })
}
