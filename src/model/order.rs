use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatusDto {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatusDto {
    Pending,
    Paid,
    Refunded,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddressDto {
    pub full_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone_number: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderDto {
    pub shipping_address: ShippingAddressDto,
    /// Defaults to `CREDIT_CARD`
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub quantity: i32,
    pub subtotal: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub order_number: String,
    pub user_id: i32,
    pub total_price: f64,
    pub status: OrderStatusDto,
    pub payment_status: PaymentStatusDto,
    pub payment_method: String,
    pub shipping_address: ShippingAddressDto,
    pub notes: Option<String>,
    pub items: Vec<OrderItemDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Status is taken as a string so unknown values map to a 400 validation error
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateOrderStatusDto {
    pub status: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePaymentStatusDto {
    pub payment_status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatisticsDto {
    pub total_orders: u64,
    /// Sum of `totalPrice` over all orders that are not cancelled
    pub total_spent: f64,
    pub orders_by_status: BTreeMap<String, u64>,
}

/// Query string of the order listing
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct OrderQueryDto {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Page size, defaults to 10, at most 100
    pub limit: Option<u64>,
    /// Only orders in this status
    pub status: Option<String>,
    /// One of `createdAt`, `totalPrice`, `status`
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_direction: Option<String>,
    /// `YYYY-MM-DD`, inclusive
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`, inclusive
    pub end_date: Option<String>,
}
