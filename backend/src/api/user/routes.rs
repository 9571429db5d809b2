//! Defines the HTTP routes for account management.
//!
//! These routes map the role-gated account operations to handler functions;
//! each requires a bearer token checked by the account service.

use axum::routing::{get, patch};
use axum::Router;

use super::handlers::{delete, list, register, update};
use crate::state::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(register))
        .route("/:id", patch(update).delete(delete))
}
