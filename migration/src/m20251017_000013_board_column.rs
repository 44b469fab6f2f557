use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000012_board::Board;

static IDX_BOARD_COLUMN_BOARD_POSITION: &str = "idx-board_column-board_id-position";
static FK_BOARD_COLUMN_BOARD_ID: &str = "fk-board_column-board_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardColumn::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardColumn::Id))
                    .col(integer(BoardColumn::BoardId))
                    .col(string(BoardColumn::Title))
                    .col(integer(BoardColumn::Position))
                    .col(timestamp(BoardColumn::CreatedAt))
                    .col(timestamp(BoardColumn::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOARD_COLUMN_BOARD_ID)
                            .from(BoardColumn::Table, BoardColumn::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: shifting positions passes through duplicates mid-statement
        manager
            .create_index(
                Index::create()
                    .name(IDX_BOARD_COLUMN_BOARD_POSITION)
                    .table(BoardColumn::Table)
                    .col(BoardColumn::BoardId)
                    .col(BoardColumn::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOARD_COLUMN_BOARD_POSITION)
                    .table(BoardColumn::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoardColumn::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoardColumn {
    Table,
    Id,
    BoardId,
    Title,
    Position,
    CreatedAt,
    UpdatedAt,
}
