//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle login and token verification. They are designed to
//! be integrated into the main Axum router.

use axum::{routing::post, Router};

use super::handlers::{login, verify};
use crate::state::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/verify", post(verify))
}
