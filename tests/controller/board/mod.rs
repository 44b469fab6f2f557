mod create_board;
mod get_board;

use bubble::{
    model::board::CreateBoardDto,
    server::controller::board::{create_board, delete_board, get_board},
};

use super::*;
