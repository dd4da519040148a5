//! HTTP rendering of roster errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_store::RosterError;
use serde::Serialize;
use thiserror::Error;

/// Wrapper that renders roster rule violations as HTTP responses.
///
/// Existence failures map to 404; business-rule violations (duplicate
/// signup, full activity, unregistering a non-participant) map to 400.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub RosterError);

/// Error response body. `detail` is the human-readable text; `code` is
/// the stable machine-readable tag.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            RosterError::ActivityNotFound(_) => (StatusCode::NOT_FOUND, "ACTIVITY_NOT_FOUND"),
            RosterError::AlreadyRegistered { .. } => {
                (StatusCode::BAD_REQUEST, "ALREADY_REGISTERED")
            }
            RosterError::ActivityFull { .. } => (StatusCode::BAD_REQUEST, "ACTIVITY_FULL"),
            RosterError::NotRegistered { .. } => (StatusCode::BAD_REQUEST, "NOT_REGISTERED"),
        };

        let body = ErrorBody {
            detail: self.0.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError(RosterError::ActivityNotFound("Ghost Club".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rule_violations_map_to_400() {
        let duplicate = ApiError(RosterError::AlreadyRegistered {
            email: "a@mergington.edu".into(),
            activity: "Chess Club".into(),
        });
        assert_eq!(duplicate.into_response().status(), StatusCode::BAD_REQUEST);

        let full = ApiError(RosterError::ActivityFull {
            activity: "Chess Club".into(),
            max_participants: 12,
        });
        assert_eq!(full.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = ApiError(RosterError::NotRegistered {
            email: "a@mergington.edu".into(),
            activity: "Chess Club".into(),
        });
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
