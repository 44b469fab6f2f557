//! Server application core modules.
//!
//! This module contains all server-side functionality for the Bubble application, including
//! HTTP routing, bearer-token authentication, database access, the realtime chat hub, and the
//! chat, commerce and social services built on top of them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
