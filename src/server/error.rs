// Bastion — API error types
//
// Maps store outcomes to HTTP status codes. The Display strings double as
// the user-facing `message` field; internal detail is only exposed as the
// `error` cause string on 500s.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Username and password are required.")]
    MissingFields,

    #[error("Username already exists.")]
    DuplicateUsername,

    #[error("User not found.")]
    UnknownUsername,

    #[error("Incorrect password.")]
    WrongPassword,

    #[error("Server error.")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateUsername(_) => ApiError::DuplicateUsername,
            StoreError::EmptyField(_) => ApiError::MissingFields,
            StoreError::Database(cause) => ApiError::Internal(cause.to_string()),
            StoreError::Hash(cause) => ApiError::Internal(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, cause) = match self {
            ApiError::MissingFields => (StatusCode::BAD_REQUEST, None),
            ApiError::DuplicateUsername => (StatusCode::CONFLICT, None),
            ApiError::UnknownUsername => (StatusCode::NOT_FOUND, None),
            ApiError::WrongPassword => (StatusCode::UNAUTHORIZED, None),
            ApiError::Internal(cause) => {
                tracing::error!(%cause, "Request failed with a server error");
                (StatusCode::INTERNAL_SERVER_ERROR, Some(cause))
            }
        };

        let body = ErrorResponse {
            message,
            error: cause,
        };
        (status, Json(body)).into_response()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_distinct_api_errors() {
        assert!(matches!(
            ApiError::from(StoreError::DuplicateUsername("alice".into())),
            ApiError::DuplicateUsername
        ));
        assert!(matches!(
            ApiError::from(StoreError::EmptyField("username")),
            ApiError::MissingFields
        ));
        assert!(matches!(
            ApiError::from(StoreError::Hash("bad params".into())),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_internal_error_carries_cause() {
        let err = ApiError::from(StoreError::Hash("salt invalid".into()));
        match err {
            ApiError::Internal(cause) => assert_eq!(cause, "salt invalid"),
            other => panic!("Expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::MissingFields, StatusCode::BAD_REQUEST),
            (ApiError::DuplicateUsername, StatusCode::CONFLICT),
            (ApiError::UnknownUsername, StatusCode::NOT_FOUND),
            (ApiError::WrongPassword, StatusCode::UNAUTHORIZED),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
