mod create_direct_room;
mod send_message;

use bubble::{
    model::chat::{CreateDirectRoomDto, SendMessageDto},
    server::controller::chat::{create_direct_room, send_message},
};

use super::*;
