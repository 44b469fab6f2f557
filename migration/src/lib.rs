pub use sea_orm_migration::prelude::*;

mod m20251017_000001_bubble_user;
mod m20251017_000002_chat_room;
mod m20251017_000003_chat_participant;
mod m20251017_000004_chat_message;
mod m20251017_000005_shop_product;
mod m20251017_000006_shop_cart;
mod m20251017_000007_shop_cart_item;
mod m20251017_000008_shop_order;
mod m20251017_000009_shop_order_item;
mod m20251017_000010_social_post;
mod m20251017_000011_social_follow;
mod m20251017_000012_board;
mod m20251017_000013_board_column;
mod m20251017_000014_board_task;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_bubble_user::Migration),
            Box::new(m20251017_000002_chat_room::Migration),
            Box::new(m20251017_000003_chat_participant::Migration),
            Box::new(m20251017_000004_chat_message::Migration),
            Box::new(m20251017_000005_shop_product::Migration),
            Box::new(m20251017_000006_shop_cart::Migration),
            Box::new(m20251017_000007_shop_cart_item::Migration),
            Box::new(m20251017_000008_shop_order::Migration),
            Box::new(m20251017_000009_shop_order_item::Migration),
            Box::new(m20251017_000010_social_post::Migration),
            Box::new(m20251017_000011_social_follow::Migration),
            Box::new(m20251017_000012_board::Migration),
            Box::new(m20251017_000013_board_column::Migration),
            Box::new(m20251017_000014_board_task::Migration),
        ]
    }
}
