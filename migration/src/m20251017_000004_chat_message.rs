use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_bubble_user::BubbleUser, m20251017_000002_chat_room::ChatRoom};

static IDX_CHAT_MESSAGE_ROOM_CREATED_AT: &str = "idx-chat_message-chat_room_id-created_at";
static FK_CHAT_MESSAGE_CHAT_ROOM_ID: &str = "fk-chat_message-chat_room_id";
static FK_CHAT_MESSAGE_SENDER_ID: &str = "fk-chat_message-sender_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessage::Id))
                    .col(integer(ChatMessage::ChatRoomId))
                    .col(integer(ChatMessage::SenderId))
                    .col(text(ChatMessage::Content))
                    .col(timestamp(ChatMessage::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHAT_MESSAGE_CHAT_ROOM_ID)
                            .from(ChatMessage::Table, ChatMessage::ChatRoomId)
                            .to(ChatRoom::Table, ChatRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHAT_MESSAGE_SENDER_ID)
                            .from(ChatMessage::Table, ChatMessage::SenderId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_MESSAGE_ROOM_CREATED_AT)
                    .table(ChatMessage::Table)
                    .col(ChatMessage::ChatRoomId)
                    .col(ChatMessage::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_MESSAGE_ROOM_CREATED_AT)
                    .table(ChatMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatMessage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ChatMessage {
    Table,
    Id,
    ChatRoomId,
    SenderId,
    Content,
    CreatedAt,
}
