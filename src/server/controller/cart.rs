use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        cart::{AddCartItemDto, CartDto, SyncCartDto, UpdateCartItemDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::cart::CartService,
    },
};

pub static CART_TAG: &str = "cart";

/// Get the caller's cart, creating an empty one on first use
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Current cart", body = CartDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let cart = CartService::new(&state.db).get_cart(auth.id).await?;

    Ok(Json(cart))
}

/// Add a product to the cart
///
/// Adding a product already in the cart increases its quantity. The resulting quantity
/// may not exceed the product's stock.
///
/// # Responses
/// - 200 (OK): Updated cart
/// - 400 (Bad Request): Missing product, quantity below 1 or not enough stock
/// - 404 (Not Found): Unknown product
#[utoipa::path(
    post,
    path = "/api/cart/items",
    tag = CART_TAG,
    security(("bearerAuth" = [])),
    request_body = AddCartItemDto,
    responses(
        (status = 200, description = "Updated cart", body = CartDto),
        (status = 400, description = "Invalid quantity or insufficient stock", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, Error> {
    let cart = CartService::new(&state.db).add_item(auth.id, payload).await?;

    Ok(Json(cart))
}

/// Set the quantity of a cart line
#[utoipa::path(
    put,
    path = "/api/cart/items/{item_id}",
    tag = CART_TAG,
    security(("bearerAuth" = [])),
    params(("item_id" = i32, Path, description = "Cart item ID")),
    request_body = UpdateCartItemDto,
    responses(
        (status = 200, description = "Updated cart", body = CartDto),
        (status = 400, description = "Invalid quantity or insufficient stock", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Item or product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, Error> {
    let cart = CartService::new(&state.db)
        .update_item(auth.id, item_id, payload)
        .await?;

    Ok(Json(cart))
}

/// Remove a line from the cart
#[utoipa::path(
    delete,
    path = "/api/cart/items/{item_id}",
    tag = CART_TAG,
    security(("bearerAuth" = [])),
    params(("item_id" = i32, Path, description = "Cart item ID")),
    responses(
        (status = 200, description = "Updated cart", body = CartDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let cart = CartService::new(&state.db)
        .remove_item(auth.id, item_id)
        .await?;

    Ok(Json(cart))
}

/// Empty the cart
#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = CART_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Empty cart", body = CartDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let cart = CartService::new(&state.db).clear_cart(auth.id).await?;

    Ok(Json(cart))
}

/// Replace the cart with a client side copy
///
/// Unknown and sold out products are dropped and quantities are capped at stock.
#[utoipa::path(
    post,
    path = "/api/cart/sync",
    tag = CART_TAG,
    security(("bearerAuth" = [])),
    request_body = SyncCartDto,
    responses(
        (status = 200, description = "Synchronised cart", body = CartDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<SyncCartDto>,
) -> Result<impl IntoResponse, Error> {
    let cart = CartService::new(&state.db).sync_cart(auth.id, payload).await?;

    Ok(Json(cart))
}
