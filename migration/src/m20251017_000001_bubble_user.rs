use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BubbleUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BubbleUser::Id))
                    .col(string_uniq(BubbleUser::Email))
                    .col(string_len_uniq(BubbleUser::Username, 20))
                    .col(string(BubbleUser::PasswordHash))
                    .col(string_len(BubbleUser::FullName, 50))
                    .col(string_null(BubbleUser::AvatarUrl))
                    .col(string_len(BubbleUser::Role, 16).default("USER"))
                    .col(timestamp(BubbleUser::CreatedAt))
                    .col(timestamp(BubbleUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BubbleUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BubbleUser {
    Table,
    Id,
    Email,
    Username,
    PasswordHash,
    FullName,
    AvatarUrl,
    Role,
    CreatedAt,
    UpdatedAt,
}
