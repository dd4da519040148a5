//! Roster rule violations.

use thiserror::Error;

/// Closed set of roster errors. The HTTP layer decides how each kind is
/// rendered; display strings are human-readable detail text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    #[error("{activity} is full ({max_participants} participants max)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered { email: String, activity: String },
}
