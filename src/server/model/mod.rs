//! Server application models and type definitions.
//!
//! This module contains data models for the server application: application state,
//! database model type aliases and conversions, the authenticated user extractor, and the
//! realtime chat event frames.

pub mod app;
pub mod auth;
pub mod db;
pub mod socket;
