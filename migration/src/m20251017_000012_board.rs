use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_bubble_user::BubbleUser;

static IDX_BOARD_OWNER_UPDATED_AT: &str = "idx-board-owner_id-updated_at";
static FK_BOARD_OWNER_ID: &str = "fk-board-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(pk_auto(Board::Id))
                    .col(integer(Board::OwnerId))
                    .col(string(Board::Title))
                    .col(text_null(Board::Description))
                    .col(timestamp(Board::CreatedAt))
                    .col(timestamp(Board::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOARD_OWNER_ID)
                            .from(Board::Table, Board::OwnerId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOARD_OWNER_UPDATED_AT)
                    .table(Board::Table)
                    .col(Board::OwnerId)
                    .col(Board::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOARD_OWNER_UPDATED_AT)
                    .table(Board::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Board::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Board {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}
