use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_bubble_user::BubbleUser, m20251017_000002_chat_room::ChatRoom};

static IDX_CHAT_PARTICIPANT_ROOM_USER: &str = "idx-chat_participant-chat_room_id-user_id";
static IDX_CHAT_PARTICIPANT_USER_ID: &str = "idx-chat_participant-user_id";
static FK_CHAT_PARTICIPANT_CHAT_ROOM_ID: &str = "fk-chat_participant-chat_room_id";
static FK_CHAT_PARTICIPANT_USER_ID: &str = "fk-chat_participant-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatParticipant::Id))
                    .col(integer(ChatParticipant::ChatRoomId))
                    .col(integer(ChatParticipant::UserId))
                    .col(boolean(ChatParticipant::IsAdmin).default(false))
                    .col(timestamp(ChatParticipant::JoinedAt))
                    .col(timestamp(ChatParticipant::LastRead))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHAT_PARTICIPANT_CHAT_ROOM_ID)
                            .from(ChatParticipant::Table, ChatParticipant::ChatRoomId)
                            .to(ChatRoom::Table, ChatRoom::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHAT_PARTICIPANT_USER_ID)
                            .from(ChatParticipant::Table, ChatParticipant::UserId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_PARTICIPANT_ROOM_USER)
                    .table(ChatParticipant::Table)
                    .col(ChatParticipant::ChatRoomId)
                    .col(ChatParticipant::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_PARTICIPANT_USER_ID)
                    .table(ChatParticipant::Table)
                    .col(ChatParticipant::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_PARTICIPANT_USER_ID)
                    .table(ChatParticipant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_PARTICIPANT_ROOM_USER)
                    .table(ChatParticipant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatParticipant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ChatParticipant {
    Table,
    Id,
    ChatRoomId,
    UserId,
    IsAdmin,
    JoinedAt,
    LastRead,
}
