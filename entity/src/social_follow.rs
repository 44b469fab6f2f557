use sea_orm::entity::prelude::*;

/// Both columns point at `bubble_user`, so no `Related` impl is provided;
/// join through `Relation::Follower` or `Relation::Following` explicitly.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social_follow")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "follow_pair")]
    pub follower_id: i32,
    #[sea_orm(unique_key = "follow_pair")]
    pub following_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bubble_user::Entity",
        from = "Column::FollowerId",
        to = "super::bubble_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::bubble_user::Entity",
        from = "Column::FollowingId",
        to = "super::bubble_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Following,
}

impl ActiveModelBehavior for ActiveModel {}
