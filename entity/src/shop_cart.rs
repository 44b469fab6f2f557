use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_cart")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
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
    #[sea_orm(has_many = "super::shop_cart_item::Entity")]
    ShopCartItem,
}

impl Related<super::bubble_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BubbleUser.def()
    }
}

impl Related<super::shop_cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopCartItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
