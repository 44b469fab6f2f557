use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub chat_room_id: i32,
    pub sender_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chat_room::Entity",
        from = "Column::ChatRoomId",
        to = "super::chat_room::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ChatRoom,
    #[sea_orm(
        belongs_to = "super::bubble_user::Entity",
        from = "Column::SenderId",
        to = "super::bubble_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BubbleUser,
}

impl Related<super::chat_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatRoom.def()
    }
}

impl Related<super::bubble_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BubbleUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
