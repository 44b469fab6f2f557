mod create_post;
mod delete_post;

use bubble::{
    model::social::PostContentDto,
    server::controller::post::{create_post, delete_post},
};

use super::*;
