//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations behind the
//! `UserStore` trait, abstracting the query logic from higher-level services.
//! Every value is bound as a parameter; the sparse UPDATE is assembled from a
//! fixed set of column names and never from caller-supplied identifiers.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use thiserror::Error;

use crate::database::models::{NewUserRecord, RoleRecord, UserChanges, UserRecord};

/// Store access failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint (username or email) was violated.
    #[error("unique constraint violation")]
    UniqueViolation,

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let is_unique = err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());
        if is_unique {
            StoreError::UniqueViolation
        } else {
            StoreError::Database(err)
        }
    }
}

/// Gateway to the user and role tables.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up an active user by username, joined with its role name.
    async fn find_active_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StoreError>;

    /// Resolve a role by its unique name.
    async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleRecord>, StoreError>;

    /// Insert a new user and return the created row.
    async fn insert_user(&self, user: NewUserRecord) -> Result<UserRecord, StoreError>;

    /// All users joined with role name, most recently created first.
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Apply a sparse update to a user; returns the updated row, or `None`
    /// if no such user exists.
    async fn update_user(
        &self,
        id: i32,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError>;

    /// Delete a user by id. Succeeds even if the row was already absent.
    async fn delete_user(&self, id: i32) -> Result<(), StoreError>;
}

const USER_COLUMNS: &str = "id, username, email, password_hash, full_name, phone, active, \
     (SELECT name FROM roles WHERE roles.id = users.role_id) AS role, created_at, updated_at";

/// Postgres-backed user store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_active_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.full_name,
                   u.phone, u.active, r.name AS role, u.created_at, u.updated_at
            FROM users u
            INNER JOIN roles r ON u.role_id = r.id
            WHERE u.username = $1 AND u.active = true
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleRecord>, StoreError> {
        let role = sqlx::query_as::<_, RoleRecord>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    async fn insert_user(&self, user: NewUserRecord) -> Result<UserRecord, StoreError> {
        let row = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, full_name, role_id, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.role_id)
        .bind(&user.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let users = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.full_name,
                   u.phone, u.active, r.name AS role, u.created_at, u.updated_at
            FROM users u
            INNER JOIN roles r ON u.role_id = r.id
            ORDER BY u.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update_user(
        &self,
        id: i32,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, StoreError> {
        let mut query = build_user_update(id, &changes);
        let row = query
            .build_query_as::<UserRecord>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn delete_user(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Assemble the sparse UPDATE statement.
///
/// Column names come exclusively from this function; caller input only ever
/// reaches the query through bound parameters. `updated_at` is stamped on
/// every update.
fn build_user_update(id: i32, changes: &UserChanges) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("UPDATE users SET ");

    {
        let mut columns = query.separated(", ");
        if let Some(full_name) = &changes.full_name {
            columns.push("full_name = ");
            columns.push_bind_unseparated(full_name.clone());
        }
        if let Some(email) = &changes.email {
            columns.push("email = ");
            columns.push_bind_unseparated(email.clone());
        }
        if let Some(phone) = &changes.phone {
            columns.push("phone = ");
            columns.push_bind_unseparated(phone.clone());
        }
        if let Some(password_hash) = &changes.password_hash {
            columns.push("password_hash = ");
            columns.push_bind_unseparated(password_hash.clone());
        }
        columns.push("updated_at = NOW()");
    }

    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(format!(" RETURNING {USER_COLUMNS}"));
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_touches_only_present_fields() {
        let changes = UserChanges {
            email: Some("ana@example.com".into()),
            ..Default::default()
        };
        let query = build_user_update(7, &changes);
        let sql = query.sql();

        assert!(sql.contains("email = $1"));
        assert!(sql.contains("updated_at = NOW()"));
        // The RETURNING list mentions every column; only the SET clause
        // may not.
        assert!(!sql.contains("full_name = "));
        assert!(!sql.contains("phone = "));
        assert!(!sql.contains("password_hash = "));
    }

    #[test]
    fn update_binds_every_allowed_field() {
        let changes = UserChanges {
            full_name: Some("Ana Pérez".into()),
            email: Some("ana@example.com".into()),
            phone: Some(Some("5551234".into())),
            password_hash: Some("$2b$10$abc".into()),
        };
        let query = build_user_update(1, &changes);
        let sql = query.sql();

        assert!(sql.contains("full_name = $1"));
        assert!(sql.contains("email = $2"));
        assert!(sql.contains("phone = $3"));
        assert!(sql.contains("password_hash = $4"));
        assert!(sql.contains("WHERE id = $5"));
    }

    #[test]
    fn update_always_stamps_updated_at() {
        let query = build_user_update(1, &UserChanges::default());
        assert!(query.sql().contains("updated_at = NOW()"));
    }

    #[test]
    fn non_unique_errors_map_to_database() {
        // RowNotFound carries no database error, so it maps to Database.
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
    }
}
