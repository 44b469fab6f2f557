mod create_column;
mod reorder_columns;

use bubble::{
    model::board::{CreateColumnDto, ReorderDto},
    server::controller::column::{create_column, reorder_columns},
};

use super::*;
