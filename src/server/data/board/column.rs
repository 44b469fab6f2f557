use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ColumnRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ColumnRepository<'a, C> {
    /// Creates a new instance of [`ColumnRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        board_id: i32,
        title: &str,
        position: i32,
    ) -> Result<entity::board_column::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let column = entity::board_column::ActiveModel {
            board_id: ActiveValue::Set(board_id),
            title: ActiveValue::Set(title.to_string()),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        column.insert(self.db).await
    }

    pub async fn get(&self, column_id: i32) -> Result<Option<entity::board_column::Model>, DbErr> {
        entity::prelude::BoardColumn::find_by_id(column_id)
            .one(self.db)
            .await
    }

    /// Columns of a board from first to last
    pub async fn list(&self, board_id: i32) -> Result<Vec<entity::board_column::Model>, DbErr> {
        entity::prelude::BoardColumn::find()
            .filter(entity::board_column::Column::BoardId.eq(board_id))
            .order_by_asc(entity::board_column::Column::Position)
            .order_by_asc(entity::board_column::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self, board_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BoardColumn::find()
            .filter(entity::board_column::Column::BoardId.eq(board_id))
            .count(self.db)
            .await
    }

    /// Adds `delta` to the position of every column of the board positioned in `from..=to`
    ///
    /// An open `to` shifts everything from `from` to the end of the board.
    pub async fn shift(
        &self,
        board_id: i32,
        from: i32,
        to: Option<i32>,
        delta: i32,
    ) -> Result<(), DbErr> {
        let mut query = entity::prelude::BoardColumn::update_many()
            .col_expr(
                entity::board_column::Column::Position,
                Expr::col(entity::board_column::Column::Position).add(delta),
            )
            .filter(entity::board_column::Column::BoardId.eq(board_id))
            .filter(entity::board_column::Column::Position.gte(from));
        if let Some(to) = to {
            query = query.filter(entity::board_column::Column::Position.lte(to));
        }

        query.exec(self.db).await?;

        Ok(())
    }

    pub async fn update(
        &self,
        column: entity::board_column::Model,
        title: &str,
        position: i32,
    ) -> Result<entity::board_column::Model, DbErr> {
        let mut column_am = column.into_active_model();
        column_am.title = ActiveValue::Set(title.to_string());
        column_am.position = ActiveValue::Set(position);
        column_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        column_am.update(self.db).await
    }

    pub async fn set_position(&self, column_id: i32, position: i32) -> Result<(), DbErr> {
        entity::prelude::BoardColumn::update_many()
            .col_expr(entity::board_column::Column::Position, Expr::value(position))
            .filter(entity::board_column::Column::Id.eq(column_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, column_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BoardColumn::delete_by_id(column_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod shift {
        use bubble_test_utils::prelude::*;

        use crate::server::data::board::ColumnRepository;

        /// Expect only columns of the board inside the range to move
        #[tokio::test]
        async fn shifts_range_of_board() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_board_tables()
                .with_user("alice")
                .build()
                .await?;
            let board = test.board().insert_board(1, "Roadmap").await?;
            let other = test.board().insert_board(1, "Other").await?;
            for (position, title) in ["Todo", "Doing", "Review", "Done"].into_iter().enumerate() {
                test.board()
                    .insert_column(board.id, title, position as i32)
                    .await?;
            }
            test.board().insert_column(other.id, "Elsewhere", 1).await?;

            let column_repo = ColumnRepository::new(&test.db);
            column_repo.shift(board.id, 3, None, 1).await?;
            column_repo.shift(board.id, 1, Some(2), 1).await?;

            let positions: Vec<(String, i32)> = column_repo
                .list(board.id)
                .await?
                .into_iter()
                .map(|c| (c.title, c.position))
                .collect();
            assert_eq!(
                positions,
                vec![
                    ("Todo".to_string(), 0),
                    ("Doing".to_string(), 2),
                    ("Review".to_string(), 3),
                    ("Done".to_string(), 4),
                ]
            );
            assert_eq!(column_repo.list(other.id).await?[0].position, 1);

            Ok(())
        }
    }
}
