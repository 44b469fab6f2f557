use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        product::{CreateProductDto, ProductDto, ProductQueryDto, UpdateProductDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::product::ProductService,
    },
};

pub static PRODUCT_TAG: &str = "product";

/// Search, filter and page through the catalogue
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(ProductQueryDto),
    responses(
        (status = 200, description = "One page of products", body = PaginatedDto<ProductDto>),
        (status = 400, description = "Invalid sort or price range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let page = ProductService::new(&state.db).list_products(query).await?;

    Ok(Json(page))
}

/// List distinct product categories in alphabetical order
#[utoipa::path(
    get,
    path = "/api/products/categories",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Categories", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = ProductService::new(&state.db).categories().await?;

    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let product = ProductService::new(&state.db).get_product(id).await?;

    Ok(Json(product))
}

/// Add a product to the catalogue, administrators only
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrators only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let product = ProductService::new(&state.db).create_product(payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update the given fields of a product, administrators only
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrators only", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let product = ProductService::new(&state.db)
        .update_product(id, payload)
        .await?;

    Ok(Json(product))
}

/// Remove a product, administrators only
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrators only", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    ProductService::new(&state.db).delete_product(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
