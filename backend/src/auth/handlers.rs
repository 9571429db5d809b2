//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for login and token
//! verification, parse request data and delegate to the account service.

use axum::extract::State;
use axum::Json;

use crate::auth::models::{LoginRequest, LoginResponse, VerifyRequest, VerifyResponse};
use crate::errors::ApiResult;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (token, user) = state.accounts.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        token,
        user,
    }))
}

/// POST /api/auth/verify
///
/// Always answers 200 with a tagged result; an invalid token is a normal
/// outcome here, not an HTTP failure.
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Json<VerifyResponse> {
    let response = match state.accounts.verify_token(&req.token) {
        Ok(claims) => VerifyResponse {
            valid: true,
            claims: Some(claims),
            reason: None,
        },
        Err(rejection) => VerifyResponse {
            valid: false,
            claims: None,
            reason: Some(rejection.reason().to_string()),
        },
    };

    Json(response)
}
