//! Bubble: chat, commerce and social backend.
//!
//! `model` holds the JSON data transfer objects exchanged with clients, `server`
//! holds everything that runs behind the HTTP listener.

pub mod model;
pub mod server;
