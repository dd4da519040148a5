//! Extracurricular activities signup service.
//!
//! A small REST API over an in-memory activity roster:
//! - List activities with their schedules and current participants
//! - Sign a student up for an activity by email
//! - Unregister a student from an activity
//!
//! The roster is seeded once at startup; mutations are not persisted.

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::ApiError;
