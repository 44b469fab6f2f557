use sea_orm_migration::{prelude::*, schema::*};

static IDX_CHAT_ROOM_UPDATED_AT: &str = "idx-chat_room-updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatRoom::Id))
                    .col(string_null(ChatRoom::Name))
                    .col(string_len(ChatRoom::Kind, 16))
                    .col(timestamp(ChatRoom::CreatedAt))
                    .col(timestamp(ChatRoom::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_ROOM_UPDATED_AT)
                    .table(ChatRoom::Table)
                    .col(ChatRoom::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_ROOM_UPDATED_AT)
                    .table(ChatRoom::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatRoom::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ChatRoom {
    Table,
    Id,
    Name,
    Kind,
    CreatedAt,
    UpdatedAt,
}
