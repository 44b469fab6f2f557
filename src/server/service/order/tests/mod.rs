mod cancel_order;
mod list_orders;

use bubble_test_utils::prelude::*;
use entity::sea_orm_active_enums::{OrderStatus, Role};

use crate::{
    model::order::{CreateOrderDto, OrderStatusDto, PaymentStatusDto, ShippingAddressDto},
    server::{
        error::{order::OrderError, validation::ValidationError, Error},
        model::auth::AuthUser,
        service::order::OrderService,
    },
};

fn customer(id: i32) -> AuthUser {
    AuthUser {
        id,
        role: Role::User,
    }
}

fn admin(id: i32) -> AuthUser {
    AuthUser {
        id,
        role: Role::Admin,
    }
}

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
        payment_method: None,
        notes: None,
    }
}
