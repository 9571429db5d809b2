//! Custom error types specific to authentication failures.
//!
//! This module defines the set of errors that can occur during
//! authentication and account management, providing clear and structured
//! error responses. Display strings are safe to show to callers; internal
//! detail is logged at the point of failure and never carried outward.

use thiserror::Error;

use crate::database::queries::StoreError;

/// Domain failures of the account service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No matching active user.
    #[error("user not found or inactive")]
    NotFound,

    /// Password did not match the stored hash.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, invalid or expired token, or insufficient role.
    #[error("not authorized")]
    Unauthorized,

    /// Requested role name does not exist.
    #[error("invalid role")]
    InvalidRole,

    /// Username or email already taken.
    #[error("username or email already exists")]
    DuplicateUser,

    /// An update request carried no fields.
    #[error("no fields to update")]
    NothingToUpdate,

    /// Unexpected store or infrastructure failure; detail is logged, not shown.
    #[error("internal server error")]
    Server,
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation => AuthError::DuplicateUser,
            StoreError::Database(e) => {
                tracing::error!(error = %e, "store call failed");
                AuthError::Server
            }
        }
    }
}
