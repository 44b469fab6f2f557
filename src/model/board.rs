use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

/// Lets an update tell an absent field (`None`) apart from an explicit `null` (`Some(None)`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A board with its columns in order, each holding its tasks in order
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetailDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub columns: Vec<ColumnWithTasksDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBoardDto {
    pub title: String,
    pub description: Option<String>,
}

/// Omitted fields are left unchanged, `description: null` clears the description
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateBoardDto {
    pub title: Option<String>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    pub id: i32,
    pub board_id: i32,
    pub title: String,
    /// Zero-based position within the board
    pub order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnWithTasksDto {
    pub id: i32,
    pub board_id: i32,
    pub title: String,
    pub order: i32,
    pub tasks: Vec<TaskDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateColumnDto {
    pub title: String,
    /// Position to insert at, appended after the last column when omitted
    pub order: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateColumnDto {
    pub title: Option<String>,
    pub order: Option<i32>,
}

/// Full ordering of a board's columns or a column's tasks
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReorderDto {
    /// Every ID of the collection exactly once, first to last
    pub ordered_ids: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i32,
    pub column_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    /// Zero-based position within the column
    pub order: i32,
    pub assignee: Option<UserSummaryDto>,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTaskDto {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub assignee_id: Option<i32>,
    /// Position to insert at, appended after the last task when omitted
    pub order: Option<i32>,
}

/// Omitted fields are left unchanged, `null` clears an optional field.
///
/// Setting `columnId` to another column moves the task there, as [`MoveTaskDto`] does.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTaskDto {
    pub title: Option<String>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub priority: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub status: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<NaiveDateTime>)]
    pub due_date: Option<Option<NaiveDateTime>>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub assignee_id: Option<Option<i32>>,
    pub order: Option<i32>,
    pub column_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveTaskDto {
    pub column_id: Option<i32>,
    /// Position in the target column, appended after the last task when omitted
    pub order: Option<i32>,
}
