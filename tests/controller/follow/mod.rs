mod follow_user;
mod unfollow;

use bubble::server::controller::follow::{follow, unfollow};

use super::*;
