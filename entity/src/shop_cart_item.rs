use sea_orm::entity::prelude::*;

/// Name, price and image are copied from the product when the item is added.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_cart_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub image_url: Option<String>,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shop_cart::Entity",
        from = "Column::CartId",
        to = "super::shop_cart::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ShopCart,
}

impl Related<super::shop_cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopCart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
