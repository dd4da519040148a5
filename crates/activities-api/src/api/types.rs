//! API request and response types.

use serde::{Deserialize, Serialize};

/// Query parameters for signup and unregister.
#[derive(Debug, Deserialize)]
pub struct SignupParams {
    /// Student email to enroll or remove
    pub email: String,
}

/// Confirmation message after a successful signup or unregister.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub activities: usize,
    pub participants: usize,
}
