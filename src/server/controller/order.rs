use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        order::{
            CreateOrderDto, OrderDto, OrderQueryDto, OrderStatisticsDto, UpdateOrderStatusDto,
            UpdatePaymentStatusDto,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::order::OrderService,
    },
};

pub static ORDER_TAG: &str = "order";

/// Place an order for the contents of the cart
///
/// Stock is reserved, the order is written and the cart emptied in one transaction.
///
/// # Responses
/// - 201 (Created): Order placed
/// - 400 (Bad Request): Invalid shipping details, empty cart, deleted product or not
///   enough stock
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Order cannot be placed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db)
        .create_order(auth.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// List orders, administrators see every user's orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    security(("bearerAuth" = [])),
    params(OrderQueryDto),
    responses(
        (status = 200, description = "One page of orders", body = PaginatedDto<OrderDto>),
        (status = 400, description = "Invalid filter or sort", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<OrderQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let page = OrderService::new(&state.db).list_orders(auth, query).await?;

    Ok(Json(page))
}

/// Order counts per status and total spent by the caller
#[utoipa::path(
    get,
    path = "/api/orders/statistics",
    tag = ORDER_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Order statistics", body = OrderStatisticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn statistics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let stats = OrderService::new(&state.db).statistics(auth.id).await?;

    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = OrderDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db).get_order(auth, id).await?;

    Ok(Json(order))
}

/// Set the fulfilment status of an order, administrators only
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = ORDER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Unknown status or order already final", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrators only", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let order = OrderService::new(&state.db)
        .update_status(id, payload)
        .await?;

    Ok(Json(order))
}

/// Set the payment status of an order, administrators only
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/payment",
    tag = ORDER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Unknown payment status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Administrators only", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let order = OrderService::new(&state.db)
        .update_payment_status(id, payload)
        .await?;

    Ok(Json(order))
}

/// Cancel one of the caller's own orders and return its stock
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/cancel",
    tag = ORDER_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = OrderDto),
        (status = 400, description = "Order can no longer be cancelled", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Order belongs to another user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let order = OrderService::new(&state.db)
        .cancel_order(auth.id, id)
        .await?;

    Ok(Json(order))
}
