//! Data structures for authentication-related entities.
//!
//! This module defines models for token claims, the public user projection
//! and the request/response envelopes exchanged with the shell. The password
//! hash never appears in any serializable type here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::models::UserRecord;

/// Identity and role payload embedded in a signed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub user_id: i32,
    /// Username at issuance time.
    pub username: String,
    /// Role name at issuance time; trusted until expiry.
    pub role: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

impl Claims {
    /// Whether the token lifetime has elapsed. A zero-length lifetime
    /// counts as already expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// User representation with the password hash stripped.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for PublicUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            full_name: record.full_name,
            role: record.role,
            phone: record.phone,
            active: record.active,
            created_at: record.created_at,
        }
    }
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Fields for registering a new user. The role is given by name and
/// resolved against the role table; the password arrives in plaintext and
/// is hashed before it ever reaches the store.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Sparse update: absent fields leave the corresponding column untouched.
/// An empty `phone` string clears the stored phone number.
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password.is_none()
    }
}

/// Token verification request body.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Successful login envelope.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: PublicUser,
}

/// Envelope carrying a single user projection.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// Envelope carrying the full user listing.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<PublicUser>,
}

/// Envelope for operations that return no data.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Tagged result of token verification; never an HTTP failure.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Claims>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
