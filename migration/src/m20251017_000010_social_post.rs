use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_bubble_user::BubbleUser;

static IDX_SOCIAL_POST_USER_CREATED_AT: &str = "idx-social_post-user_id-created_at";
static FK_SOCIAL_POST_USER_ID: &str = "fk-social_post-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialPost::Table)
                    .if_not_exists()
                    .col(pk_auto(SocialPost::Id))
                    .col(integer(SocialPost::UserId))
                    .col(text(SocialPost::Content))
                    .col(timestamp(SocialPost::CreatedAt))
                    .col(timestamp(SocialPost::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOCIAL_POST_USER_ID)
                            .from(SocialPost::Table, SocialPost::UserId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOCIAL_POST_USER_CREATED_AT)
                    .table(SocialPost::Table)
                    .col(SocialPost::UserId)
                    .col(SocialPost::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SOCIAL_POST_USER_CREATED_AT)
                    .table(SocialPost::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SocialPost::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SocialPost {
    Table,
    Id,
    UserId,
    Content,
    CreatedAt,
    UpdatedAt,
}
