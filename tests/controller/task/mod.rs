mod create_task;
mod move_task;

use bubble::{
    model::board::{CreateTaskDto, MoveTaskDto},
    server::controller::task::{create_task, move_task},
};

use super::*;
