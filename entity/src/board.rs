use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bubble_user::Entity",
        from = "Column::OwnerId",
        to = "super::bubble_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BubbleUser,
    #[sea_orm(has_many = "super::board_column::Entity")]
    BoardColumn,
}

impl Related<super::bubble_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BubbleUser.def()
    }
}

impl Related<super::board_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardColumn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
