use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub column_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<DateTime>,
    pub position: i32,
    pub assignee_id: Option<i32>,
    pub created_by: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::board_column::Entity",
        from = "Column::ColumnId",
        to = "super::board_column::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BoardColumn,
    #[sea_orm(
        belongs_to = "super::bubble_user::Entity",
        from = "Column::AssigneeId",
        to = "super::bubble_user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Assignee,
    #[sea_orm(
        belongs_to = "super::bubble_user::Entity",
        from = "Column::CreatedBy",
        to = "super::bubble_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Creator,
}

impl Related<super::board_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardColumn.def()
    }
}

/// Tasks join users through their assignee
impl Related<super::bubble_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
