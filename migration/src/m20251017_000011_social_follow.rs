use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_bubble_user::BubbleUser;

static IDX_SOCIAL_FOLLOW_PAIR: &str = "idx-social_follow-follower_id-following_id";
static IDX_SOCIAL_FOLLOW_FOLLOWING_ID: &str = "idx-social_follow-following_id";
static FK_SOCIAL_FOLLOW_FOLLOWER_ID: &str = "fk-social_follow-follower_id";
static FK_SOCIAL_FOLLOW_FOLLOWING_ID: &str = "fk-social_follow-following_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialFollow::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialFollow::Id))
                    .col(integer(SocialFollow::FollowerId))
                    .col(integer(SocialFollow::FollowingId))
                    .col(timestamp(SocialFollow::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOCIAL_FOLLOW_FOLLOWER_ID)
                            .from(SocialFollow::Table, SocialFollow::FollowerId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOCIAL_FOLLOW_FOLLOWING_ID)
                            .from(SocialFollow::Table, SocialFollow::FollowingId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOCIAL_FOLLOW_PAIR)
                    .table(SocialFollow::Table)
                    .col(SocialFollow::FollowerId)
                    .col(SocialFollow::FollowingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOCIAL_FOLLOW_FOLLOWING_ID)
                    .table(SocialFollow::Table)
                    .col(SocialFollow::FollowingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SOCIAL_FOLLOW_FOLLOWING_ID)
                    .table(SocialFollow::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SOCIAL_FOLLOW_PAIR)
                    .table(SocialFollow::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocialFollow::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SocialFollow {
    Table,
    Id,
    FollowerId,
    FollowingId,
    CreatedAt,
}
