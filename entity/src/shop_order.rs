use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{OrderStatus, PaymentStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub order_number: String,
    #[sea_orm(column_type = "Double")]
    pub total_price: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: String,
    pub shipping_full_name: String,
    pub shipping_address_line1: String,
    pub shipping_address_line2: Option<String>,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_postal_code: String,
    pub shipping_country: String,
    pub shipping_phone_number: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bubble_user::Entity",
        from = "Column::UserId",
        to = "super::bubble_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BubbleUser,
    #[sea_orm(has_many = "super::shop_order_item::Entity")]
    ShopOrderItem,
}

impl Related<super::bubble_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BubbleUser.def()
    }
}

impl Related<super::shop_order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopOrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
