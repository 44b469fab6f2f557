use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Role;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bubble_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chat_participant::Entity")]
    ChatParticipant,
    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessage,
    #[sea_orm(has_one = "super::shop_cart::Entity")]
    ShopCart,
    #[sea_orm(has_many = "super::shop_order::Entity")]
    ShopOrder,
    #[sea_orm(has_many = "super::social_post::Entity")]
    SocialPost,
}

impl Related<super::chat_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatParticipant.def()
    }
}

impl Related<super::chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessage.def()
    }
}

impl Related<super::shop_cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopCart.def()
    }
}

impl Related<super::shop_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopOrder.def()
    }
}

impl Related<super::social_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
