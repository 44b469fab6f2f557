use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub quantity: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartDto {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<CartItemDto>,
    /// Sum of `price * quantity` over all items
    pub total_price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemDto {
    #[serde(default)]
    pub product_id: Option<i32>,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateCartItemDto {
    pub quantity: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncCartItemDto {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SyncCartDto {
    pub items: Vec<SyncCartItemDto>,
}
