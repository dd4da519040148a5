//! HTTP request handlers.

use super::types::{HealthResponse, MessageResponse, SignupParams};
use super::AppState;
use crate::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use roster_store::Activity;
use std::collections::HashMap;
use tracing::info;

/// Root path redirects to the signup page.
pub async fn index_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        activities: state.roster.activity_count().await,
        participants: state.roster.participant_count().await,
    })
}

/// List every activity with its current participants.
pub async fn list_activities(State(state): State<AppState>) -> Json<HashMap<String, Activity>> {
    Json(state.roster.snapshot().await)
}

/// Sign a student up for an activity.
///
/// The activity name arrives percent-decoded from the path, so names
/// containing spaces match roster keys whether the caller encoded them
/// or not.
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!(activity = %activity_name, email = %params.email, "Signup request received");

    let activity = state.roster.signup(&activity_name, &params.email).await?;

    Ok(Json(MessageResponse {
        message: format!(
            "Signed up {} for {} ({} spots left)",
            params.email,
            activity_name,
            activity.spots_left()
        ),
    }))
}

/// Remove a student from an activity.
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!(activity = %activity_name, email = %params.email, "Unregister request received");

    state.roster.unregister(&activity_name, &params.email).await?;

    Ok(Json(MessageResponse {
        message: format!("Removed {} from {}", params.email, activity_name),
    }))
}
