//! Global application error types and handlers.
//!
//! This module maps domain failures onto the HTTP boundary: every failing
//! response is a `{success: false, message}` envelope with a safe,
//! human-readable message. Internal error detail never crosses this
//! boundary; it is logged where the failure occurs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::errors::AuthError;

/// Failure envelope returned to the shell.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

/// HTTP-boundary error wrapping a domain failure.
#[derive(Debug)]
pub struct ApiError(pub AuthError);

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Unauthorized => StatusCode::FORBIDDEN,
            AuthError::InvalidRole | AuthError::NothingToUpdate => StatusCode::BAD_REQUEST,
            AuthError::DuplicateUser => StatusCode::CONFLICT,
            AuthError::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = FailureBody {
            success: false,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        let cases = [
            (AuthError::NotFound, StatusCode::NOT_FOUND),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::Unauthorized, StatusCode::FORBIDDEN),
            (AuthError::InvalidRole, StatusCode::BAD_REQUEST),
            (AuthError::DuplicateUser, StatusCode::CONFLICT),
            (AuthError::NothingToUpdate, StatusCode::BAD_REQUEST),
            (AuthError::Server, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code(), status);
        }
    }

    #[test]
    fn server_error_message_hides_detail() {
        assert_eq!(AuthError::Server.to_string(), "internal server error");
    }
}
