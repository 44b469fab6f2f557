mod add_item;
mod remove_item;

use bubble::{
    model::cart::AddCartItemDto,
    server::controller::cart::{add_item, remove_item},
};

use super::*;
