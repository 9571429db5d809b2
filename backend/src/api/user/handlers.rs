//! Handler functions for account management API endpoints.
//!
//! These functions process requests for creating, listing, updating and
//! deleting accounts. Authorization decisions happen inside the account
//! service; handlers only carry the bearer token through.

use axum::extract::{Path, State};
use axum::Json;

use crate::auth::middleware::BearerToken;
use crate::auth::models::{MessageResponse, NewUser, UserPatch, UserResponse, UsersResponse};
use crate::errors::ApiResult;
use crate::state::AppState;

/// POST /api/users — register a new account (admin only).
pub async fn register(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.accounts.register(new_user, &token).await?;

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// GET /api/users — list all accounts (admin only).
pub async fn list(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<UsersResponse>> {
    let users = state.accounts.list_users(&token).await?;

    Ok(Json(UsersResponse {
        success: true,
        users,
    }))
}

/// PATCH /api/users/:id — sparse update (self or admin).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    BearerToken(token): BearerToken,
    Json(patch): Json<UserPatch>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.accounts.update_user(id, patch, &token).await?;

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// DELETE /api/users/:id — remove an account (admin only).
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<MessageResponse>> {
    state.accounts.delete_user(id, &token).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "user deleted".to_string(),
    }))
}
