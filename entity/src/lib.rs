pub mod prelude;

pub mod board;
pub mod board_column;
pub mod board_task;
pub mod bubble_user;
pub mod chat_message;
pub mod chat_participant;
pub mod chat_room;
pub mod sea_orm_active_enums;
pub mod shop_cart;
pub mod shop_cart_item;
pub mod shop_order;
pub mod shop_order_item;
pub mod shop_product;
pub mod social_follow;
pub mod social_post;
