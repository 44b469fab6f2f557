//! Utility functions and helpers for server operations.
//!
//! Token signing (`jwt`), password hashing (`password`), request validation rules
//! (`validation`) and date parsing (`time`). These are used by services and extractors.

pub mod jwt;
pub mod password;
pub mod time;
pub mod validation;
