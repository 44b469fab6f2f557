use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::product::{CreateProductDto, UpdateProductDto};

/// Column a product listing can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    CreatedAt,
    Price,
    Name,
    Stock,
}

impl ProductSort {
    fn column(self) -> entity::shop_product::Column {
        match self {
            Self::CreatedAt => entity::shop_product::Column::CreatedAt,
            Self::Price => entity::shop_product::Column::Price,
            Self::Name => entity::shop_product::Column::Name,
            Self::Stock => entity::shop_product::Column::Stock,
        }
    }
}

/// Filters for [`ProductRepository::list`], `None` fields are not applied.
#[derive(Clone, Debug)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// Substring matched against name or description
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: ProductSort,
    pub order: Order,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            sort: ProductSort::default(),
            order: Order::Desc,
        }
    }
}

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        product: &CreateProductDto,
    ) -> Result<entity::shop_product::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let product = entity::shop_product::ActiveModel {
            name: ActiveValue::Set(product.name.trim().to_string()),
            description: ActiveValue::Set(product.description.clone()),
            price: ActiveValue::Set(product.price),
            image_url: ActiveValue::Set(product.image_url.clone()),
            category: ActiveValue::Set(product.category.trim().to_string()),
            stock: ActiveValue::Set(product.stock),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    pub async fn get(&self, product_id: i32) -> Result<Option<entity::shop_product::Model>, DbErr> {
        entity::prelude::ShopProduct::find_by_id(product_id)
            .one(self.db)
            .await
    }

    /// Gets one page of products matching `filter` along with the total match count
    ///
    /// `page` is 1-based.
    pub async fn list(
        &self,
        filter: &ProductFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::shop_product::Model>, u64), DbErr> {
        let mut condition = Condition::all();

        if let Some(category) = &filter.category {
            condition = condition.add(entity::shop_product::Column::Category.eq(category.as_str()));
        }
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::shop_product::Column::Name.contains(search.as_str()))
                    .add(entity::shop_product::Column::Description.contains(search.as_str())),
            );
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(entity::shop_product::Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(entity::shop_product::Column::Price.lte(max_price));
        }

        let query = entity::prelude::ShopProduct::find().filter(condition);
        let total = query.clone().count(self.db).await?;

        let products = query
            .order_by(filter.sort.column(), filter.order.clone())
            .order_by(entity::shop_product::Column::Id, filter.order.clone())
            .offset(super::page_offset(page, limit))
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((products, total))
    }

    /// Distinct product categories in alphabetical order
    pub async fn categories(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::ShopProduct::find()
            .select_only()
            .column(entity::shop_product::Column::Category)
            .distinct()
            .order_by_asc(entity::shop_product::Column::Category)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Applies the fields present in `changes`, returns None if the product does not exist
    pub async fn update(
        &self,
        product_id: i32,
        changes: &UpdateProductDto,
    ) -> Result<Option<entity::shop_product::Model>, DbErr> {
        let product = match entity::prelude::ShopProduct::find_by_id(product_id)
            .one(self.db)
            .await?
        {
            Some(product) => product,
            None => return Ok(None),
        };

        let mut product_am = product.into_active_model();
        if let Some(name) = &changes.name {
            product_am.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(description) = &changes.description {
            product_am.description = ActiveValue::Set(description.clone());
        }
        if let Some(price) = changes.price {
            product_am.price = ActiveValue::Set(price);
        }
        if let Some(image_url) = &changes.image_url {
            product_am.image_url = ActiveValue::Set(Some(image_url.clone()));
        }
        if let Some(category) = &changes.category {
            product_am.category = ActiveValue::Set(category.trim().to_string());
        }
        if let Some(stock) = changes.stock {
            product_am.stock = ActiveValue::Set(stock);
        }
        product_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    /// Deletes a product
    ///
    /// Returns OK regardless of product existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ShopProduct::delete_by_id(product_id)
            .exec(self.db)
            .await
    }

    /// Takes `quantity` units out of stock if at least that many remain
    ///
    /// The check and the decrement happen in a single conditional UPDATE.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was decremented
    /// - `Ok(false)` - Product does not exist or has fewer than `quantity` units
    pub async fn reserve_stock(&self, product_id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ShopProduct::update_many()
            .col_expr(
                entity::shop_product::Column::Stock,
                Expr::col(entity::shop_product::Column::Stock).sub(quantity),
            )
            .filter(entity::shop_product::Column::Id.eq(product_id))
            .filter(entity::shop_product::Column::Stock.gte(quantity))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Puts `quantity` units back into stock, returns false if the product no longer exists
    pub async fn restore_stock(&self, product_id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ShopProduct::update_many()
            .col_expr(
                entity::shop_product::Column::Stock,
                Expr::col(entity::shop_product::Column::Stock).add(quantity),
            )
            .filter(entity::shop_product::Column::Id.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
