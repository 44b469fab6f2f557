mod create_direct_room;
mod get_room;

use bubble_test_utils::prelude::*;

use crate::server::{
    error::{chat::ChatError, Error},
    service::chat::ChatService,
};
