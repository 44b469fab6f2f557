//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{
    http::{Method, StatusCode, Uri},
    response::Response,
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, error::error_response, model::app::AppState};

/// Declares the `bearerAuth` scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document served at `/api/docs/openapi.json`, with Swagger UI at
/// `/api/docs`. Requests matching no route get a JSON 404 naming the method and path.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, jwt, hub: ChatHub::default() };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Bubble", description = "Chat, commerce and social API"),
        modifiers(&SecurityAddon),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Registration, login and the current user"),
            (name = controller::user::USER_TAG, description = "Public user directory"),
            (name = controller::chat::CHAT_TAG, description = "Chat rooms, messages and the realtime socket"),
            (name = controller::product::PRODUCT_TAG, description = "Product catalogue"),
            (name = controller::cart::CART_TAG, description = "Shopping cart"),
            (name = controller::order::ORDER_TAG, description = "Checkout and order lifecycle"),
            (name = controller::post::POST_TAG, description = "Posts and the follow feed"),
            (name = controller::follow::FOLLOW_TAG, description = "Follow relationships"),
            (name = controller::board::BOARD_TAG, description = "Task boards"),
            (name = controller::column::COLUMN_TAG, description = "Ordered columns of a board"),
            (name = controller::task::TASK_TAG, description = "Ordered tasks of a column"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::user::list_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::chat::list_rooms))
        .routes(routes!(controller::chat::get_room))
        .routes(routes!(
            controller::chat::get_messages,
            controller::chat::send_message
        ))
        .routes(routes!(controller::chat::create_direct_room))
        .routes(routes!(controller::chat::create_group_room))
        .routes(routes!(controller::socket::connect))
        .routes(routes!(
            controller::product::list_products,
            controller::product::create_product
        ))
        .routes(routes!(controller::product::categories))
        .routes(routes!(
            controller::product::get_product,
            controller::product::update_product,
            controller::product::delete_product
        ))
        .routes(routes!(
            controller::cart::get_cart,
            controller::cart::clear_cart
        ))
        .routes(routes!(controller::cart::add_item))
        .routes(routes!(
            controller::cart::update_item,
            controller::cart::remove_item
        ))
        .routes(routes!(controller::cart::sync_cart))
        .routes(routes!(
            controller::order::create_order,
            controller::order::list_orders
        ))
        .routes(routes!(controller::order::statistics))
        .routes(routes!(controller::order::get_order))
        .routes(routes!(controller::order::update_status))
        .routes(routes!(controller::order::update_payment_status))
        .routes(routes!(controller::order::cancel_order))
        .routes(routes!(controller::post::create_post))
        .routes(routes!(controller::post::feed))
        .routes(routes!(controller::post::user_posts))
        .routes(routes!(
            controller::post::get_post,
            controller::post::update_post,
            controller::post::delete_post
        ))
        .routes(routes!(
            controller::follow::follow,
            controller::follow::unfollow
        ))
        .routes(routes!(controller::follow::following))
        .routes(routes!(controller::follow::followers))
        .routes(routes!(controller::follow::status))
        .routes(routes!(
            controller::board::create_board,
            controller::board::list_boards
        ))
        .routes(routes!(
            controller::board::get_board,
            controller::board::update_board,
            controller::board::delete_board
        ))
        .routes(routes!(
            controller::column::create_column,
            controller::column::list_columns
        ))
        .routes(routes!(controller::column::reorder_columns))
        .routes(routes!(
            controller::column::get_column,
            controller::column::update_column,
            controller::column::delete_column
        ))
        .routes(routes!(
            controller::task::create_task,
            controller::task::list_tasks
        ))
        .routes(routes!(controller::task::reorder_tasks))
        .routes(routes!(
            controller::task::get_task,
            controller::task::update_task,
            controller::task::delete_task
        ))
        .routes(routes!(controller::task::move_task))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(not_found)
}

async fn not_found(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("Not Found - {} {}", method, uri.path()),
    )
}
