use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub image_url: Option<String>,
    pub quantity: i32,
    #[sea_orm(column_type = "Double")]
    pub subtotal: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shop_order::Entity",
        from = "Column::OrderId",
        to = "super::shop_order::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ShopOrder,
}

impl Related<super::shop_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
