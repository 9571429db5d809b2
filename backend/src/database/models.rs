//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models:
//! `UserRecord` carries the password hash and is never serialized to callers.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A user row joined with its role name.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub active: bool,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A role row.
#[derive(Debug, Clone, FromRow)]
pub struct RoleRecord {
    pub id: i32,
    pub name: String,
}

/// Values for inserting a new user. The password arrives here already hashed.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role_id: i32,
    pub phone: Option<String>,
}

/// Column values for a sparse user update. `None` leaves the column
/// untouched; for `phone`, `Some(None)` clears it to NULL.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub password_hash: Option<String>,
}
