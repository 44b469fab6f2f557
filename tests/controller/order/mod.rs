mod cancel_order;
mod create_order;
mod update_status;

use bubble::{
    model::order::{CreateOrderDto, ShippingAddressDto, UpdateOrderStatusDto},
    server::controller::order::{cancel_order, create_order, update_status},
};
use entity::sea_orm_active_enums::OrderStatus;

use super::*;

fn checkout() -> CreateOrderDto {
    CreateOrderDto {
        shipping_address: ShippingAddressDto {
            full_name: "Alice Liddell".to_string(),
            address_line1: "12 Rabbit Hole".to_string(),
            address_line2: None,
            city: "Oxford".to_string(),
            state: "Oxon".to_string(),
            postal_code: "OX1 1AA".to_string(),
            country: "England".to_string(),
            phone_number: "5550123".to_string(),
        },
        payment_method: Some("PAYPAL".to_string()),
        notes: None,
    }
}
