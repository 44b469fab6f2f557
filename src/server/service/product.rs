use sea_orm::{DatabaseConnection, Order};

use crate::{
    model::{
        api::PaginatedDto,
        product::{CreateProductDto, ProductDto, ProductQueryDto, UpdateProductDto},
    },
    server::{
        data::product::{ProductFilter, ProductRepository, ProductSort},
        error::{product::ProductError, validation::ValidationError, Error},
        util::validation::Validator,
    },
};

const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of the catalogue.
    ///
    /// Unknown `sortBy`/`sortDirection` values and an inverted price range fail
    /// validation rather than being ignored.
    pub async fn list_products(
        &self,
        query: ProductQueryDto,
    ) -> Result<PaginatedDto<ProductDto>, Error> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let sort = match query.sort_by.as_deref() {
            None | Some("createdAt") => ProductSort::CreatedAt,
            Some("price") => ProductSort::Price,
            Some("name") => ProductSort::Name,
            Some("stock") => ProductSort::Stock,
            Some(_) => {
                return Err(ValidationError::field(
                    "sortBy",
                    "Must be one of createdAt, price, name, stock",
                )
                .into())
            }
        };
        let order = parse_direction(query.sort_direction.as_deref())?;

        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(ValidationError::field(
                    "minPrice",
                    "Must not be greater than maxPrice",
                )
                .into());
            }
        }

        let filter = ProductFilter {
            category: query.category.filter(|c| !c.trim().is_empty()),
            search: query.search.filter(|s| !s.trim().is_empty()),
            min_price: query.min_price,
            max_price: query.max_price,
            sort,
            order,
        };

        let (products, total) = ProductRepository::new(self.db)
            .list(&filter, page, limit)
            .await?;

        Ok(PaginatedDto::new(
            products.into_iter().map(ProductDto::from).collect(),
            total,
            page,
            limit,
        ))
    }

    pub async fn categories(&self) -> Result<Vec<String>, Error> {
        Ok(ProductRepository::new(self.db).categories().await?)
    }

    pub async fn get_product(&self, product_id: i32) -> Result<ProductDto, Error> {
        match ProductRepository::new(self.db).get(product_id).await? {
            Some(product) => Ok(product.into()),
            None => Err(ProductError::NotFound(product_id).into()),
        }
    }

    pub async fn create_product(&self, payload: CreateProductDto) -> Result<ProductDto, Error> {
        Validator::new()
            .length("name", payload.name.trim(), 1, 100)
            .check(
                !payload.description.trim().is_empty(),
                "description",
                "Description is required",
            )
            .check(payload.price >= 0.0, "price", "Price must not be negative")
            .check(payload.stock >= 0, "stock", "Stock must not be negative")
            .check(
                !payload.category.trim().is_empty(),
                "category",
                "Category is required",
            )
            .finish()?;

        let product = ProductRepository::new(self.db).create(&payload).await?;

        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product.into())
    }

    /// Applies a partial update, validating only the fields present.
    pub async fn update_product(
        &self,
        product_id: i32,
        payload: UpdateProductDto,
    ) -> Result<ProductDto, Error> {
        let mut validator = Validator::new();
        if let Some(name) = &payload.name {
            validator.length("name", name.trim(), 1, 100);
        }
        if let Some(description) = &payload.description {
            validator.check(
                !description.trim().is_empty(),
                "description",
                "Description is required",
            );
        }
        if let Some(price) = payload.price {
            validator.check(price >= 0.0, "price", "Price must not be negative");
        }
        if let Some(stock) = payload.stock {
            validator.check(stock >= 0, "stock", "Stock must not be negative");
        }
        if let Some(category) = &payload.category {
            validator.check(!category.trim().is_empty(), "category", "Category is required");
        }
        validator.finish()?;

        match ProductRepository::new(self.db)
            .update(product_id, &payload)
            .await?
        {
            Some(product) => Ok(product.into()),
            None => Err(ProductError::NotFound(product_id).into()),
        }
    }

    pub async fn delete_product(&self, product_id: i32) -> Result<(), Error> {
        let result = ProductRepository::new(self.db).delete(product_id).await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(product_id).into());
        }

        tracing::info!("Deleted product {}", product_id);

        Ok(())
    }
}

/// Parses `asc`/`desc`, defaulting to descending.
pub(crate) fn parse_direction(direction: Option<&str>) -> Result<Order, ValidationError> {
    match direction {
        None | Some("desc") => Ok(Order::Desc),
        Some("asc") => Ok(Order::Asc),
        Some(_) => Err(ValidationError::field(
            "sortDirection",
            "Must be asc or desc",
        )),
    }
}

#[cfg(test)]
mod tests {

    mod list_products {
        use bubble_test_utils::prelude::*;

        use crate::{
            model::product::ProductQueryDto,
            server::{error::Error, service::product::ProductService},
        };

        /// Expect default paging and newest-first order
        #[tokio::test]
        async fn uses_defaults() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_product("Lamp", 1)
                .with_product("Desk", 1)
                .build()
                .await?;

            let product_service = ProductService::new(&test.db);
            let page = product_service
                .list_products(ProductQueryDto::default())
                .await
                .unwrap();

            assert_eq!(page.page, 1);
            assert_eq!(page.limit, 10);
            assert_eq!(page.total, 2);
            assert_eq!(page.total_pages, 1);
            assert_eq!(page.data[0].name, "Desk");

            Ok(())
        }

        /// Expect an empty page rather than an overflow for absurd page numbers
        #[tokio::test]
        async fn handles_huge_page() -> Result<(), TestError> {
            let test = TestBuilder::new().with_product("Lamp", 1).build().await?;

            let product_service = ProductService::new(&test.db);
            let page = product_service
                .list_products(ProductQueryDto {
                    page: Some(u64::MAX),
                    ..Default::default()
                })
                .await
                .unwrap();

            assert!(page.data.is_empty());
            assert_eq!(page.total, 1);

            Ok(())
        }

        /// Expect validation errors for unknown sort options
        #[tokio::test]
        async fn rejects_unknown_sort() -> Result<(), TestError> {
            let test = TestBuilder::new().with_shop_tables().build().await?;

            let product_service = ProductService::new(&test.db);
            let bad_column = product_service
                .list_products(ProductQueryDto {
                    sort_by: Some("colour".to_string()),
                    ..Default::default()
                })
                .await;
            let bad_direction = product_service
                .list_products(ProductQueryDto {
                    sort_direction: Some("sideways".to_string()),
                    ..Default::default()
                })
                .await;

            assert!(matches!(bad_column, Err(Error::ValidationError(_))));
            assert!(matches!(bad_direction, Err(Error::ValidationError(_))));

            Ok(())
        }
    }

    mod create_product {
        use bubble_test_utils::prelude::*;

        use crate::{
            model::product::CreateProductDto,
            server::{error::Error, service::product::ProductService},
        };

        /// Expect the product to be stored with a trimmed name
        #[tokio::test]
        async fn creates_product() -> Result<(), TestError> {
            let test = TestBuilder::new().with_shop_tables().build().await?;

            let product_service = ProductService::new(&test.db);
            let product = product_service
                .create_product(CreateProductDto {
                    name: " Lamp ".to_string(),
                    description: "A lamp".to_string(),
                    price: 9.99,
                    image_url: None,
                    category: "home".to_string(),
                    stock: 4,
                })
                .await
                .unwrap();

            assert_eq!(product.name, "Lamp");
            assert_eq!(product.stock, 4);

            Ok(())
        }

        /// Expect every invalid field reported
        #[tokio::test]
        async fn rejects_invalid_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_shop_tables().build().await?;

            let product_service = ProductService::new(&test.db);
            let result = product_service
                .create_product(CreateProductDto {
                    price: -1.0,
                    stock: -1,
                    ..Default::default()
                })
                .await;

            let Err(Error::ValidationError(err)) = result else {
                panic!("expected validation error");
            };
            let fields: Vec<&str> = err.0.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(
                fields,
                vec!["name", "description", "price", "stock", "category"]
            );

            Ok(())
        }
    }

    mod delete_product {
        use bubble_test_utils::prelude::*;

        use crate::server::{
            error::{product::ProductError, Error},
            service::product::ProductService,
        };

        /// Expect NotFound on the second delete
        #[tokio::test]
        async fn deletes_once() -> Result<(), TestError> {
            let test = TestBuilder::new().with_product("Lamp", 1).build().await?;

            let product_service = ProductService::new(&test.db);

            assert!(product_service.delete_product(1).await.is_ok());
            assert!(matches!(
                product_service.delete_product(1).await,
                Err(Error::ProductError(ProductError::NotFound(1)))
            ));

            Ok(())
        }
    }
}
