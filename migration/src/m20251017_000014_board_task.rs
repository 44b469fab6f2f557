use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_bubble_user::BubbleUser, m20251017_000013_board_column::BoardColumn,
};

static IDX_BOARD_TASK_COLUMN_POSITION: &str = "idx-board_task-column_id-position";
static FK_BOARD_TASK_COLUMN_ID: &str = "fk-board_task-column_id";
static FK_BOARD_TASK_ASSIGNEE_ID: &str = "fk-board_task-assignee_id";
static FK_BOARD_TASK_CREATED_BY: &str = "fk-board_task-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardTask::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardTask::Id))
                    .col(integer(BoardTask::ColumnId))
                    .col(string(BoardTask::Title))
                    .col(text_null(BoardTask::Description))
                    .col(string_null(BoardTask::Priority))
                    .col(string_null(BoardTask::Status))
                    .col(timestamp_null(BoardTask::DueDate))
                    .col(integer(BoardTask::Position))
                    .col(integer_null(BoardTask::AssigneeId))
                    .col(integer(BoardTask::CreatedBy))
                    .col(timestamp(BoardTask::CreatedAt))
                    .col(timestamp(BoardTask::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOARD_TASK_COLUMN_ID)
                            .from(BoardTask::Table, BoardTask::ColumnId)
                            .to(BoardColumn::Table, BoardColumn::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOARD_TASK_ASSIGNEE_ID)
                            .from(BoardTask::Table, BoardTask::AssigneeId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOARD_TASK_CREATED_BY)
                            .from(BoardTask::Table, BoardTask::CreatedBy)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOARD_TASK_COLUMN_POSITION)
                    .table(BoardTask::Table)
                    .col(BoardTask::ColumnId)
                    .col(BoardTask::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOARD_TASK_COLUMN_POSITION)
                    .table(BoardTask::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoardTask::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BoardTask {
    Table,
    Id,
    ColumnId,
    Title,
    Description,
    Priority,
    Status,
    DueDate,
    Position,
    AssigneeId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
