//! Core business logic for the authentication system.
//!
//! The account service orchestrates password hashing, token issuance and
//! verification, the authorization policy and the user store to implement
//! login, registration, listing, sparse update and deletion. Every request
//! is terminal on its first failure; expected domain failures map to typed
//! errors and unexpected store failures surface only as a generic server
//! error.

use std::sync::Arc;

use crate::auth::errors::AuthError;
use crate::auth::models::{Claims, NewUser, PublicUser, UserPatch};
use crate::auth::password;
use crate::auth::policy::{authorize, Operation};
use crate::auth::token::{TokenRejection, TokenService};
use crate::config::AuthConfig;
use crate::database::models::{NewUserRecord, UserChanges};
use crate::database::queries::UserStore;

/// Orchestrates credential verification, token handling and account
/// management against an injected user store.
pub struct AccountService<S: UserStore> {
    store: Arc<S>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl<S: UserStore> AccountService<S> {
    /// Create the service from configuration and an injected store.
    pub fn new(config: &AuthConfig, store: Arc<S>) -> Self {
        Self {
            store,
            tokens: TokenService::new(&config.jwt_secret, config.token_ttl),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// Authenticate with username and password, issuing a fresh token.
    ///
    /// Fails with `NotFound` when no active user matches, and with
    /// `InvalidCredentials` when the password does not verify.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, PublicUser), AuthError> {
        let Some(user) = self.store.find_active_by_username(username).await? else {
            tracing::debug!(username, "login rejected: unknown or inactive user");
            return Err(AuthError::NotFound);
        };

        if !password::verify(password, &user.password_hash) {
            tracing::debug!(username, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(user.id, &user.username, &user.role)
            .map_err(|e| {
                tracing::error!(error = %e, "token issuance failed");
                AuthError::Server
            })?;

        Ok((token, user.into()))
    }

    /// Verify a token, returning its claims or the rejection reason.
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenRejection> {
        self.tokens.verify(token)
    }

    /// Register a new user. Admin only.
    ///
    /// The role name must resolve to an existing role and the password is
    /// hashed before insertion; a unique-constraint conflict on username or
    /// email surfaces as `DuplicateUser`.
    pub async fn register(&self, new_user: NewUser, token: &str) -> Result<PublicUser, AuthError> {
        self.authorized(token, Operation::Register)?;

        let Some(role) = self.store.find_role_by_name(&new_user.role).await? else {
            return Err(AuthError::InvalidRole);
        };

        let password_hash = self.hash_password(&new_user.password)?;

        let created = self
            .store
            .insert_user(NewUserRecord {
                username: new_user.username,
                email: new_user.email,
                password_hash,
                full_name: new_user.full_name,
                role_id: role.id,
                phone: new_user.phone,
            })
            .await?;

        Ok(created.into())
    }

    /// List all users with their role names, most recent first. Admin only.
    pub async fn list_users(&self, token: &str) -> Result<Vec<PublicUser>, AuthError> {
        self.authorized(token, Operation::ListUsers)?;

        let users = self.store.list_users().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    /// Apply a sparse update to a user. Allowed for the user itself or an
    /// admin; untouched fields keep their stored values.
    pub async fn update_user(
        &self,
        target_id: i32,
        patch: UserPatch,
        token: &str,
    ) -> Result<PublicUser, AuthError> {
        self.authorized(token, Operation::UpdateUser { target_id })?;

        if patch.is_empty() {
            return Err(AuthError::NothingToUpdate);
        }

        let password_hash = match &patch.password {
            Some(plaintext) => Some(self.hash_password(plaintext)?),
            None => None,
        };

        let changes = UserChanges {
            full_name: patch.full_name,
            email: patch.email,
            // An explicitly empty phone clears the stored number.
            phone: patch
                .phone
                .map(|p| if p.is_empty() { None } else { Some(p) }),
            password_hash,
        };

        let Some(updated) = self.store.update_user(target_id, changes).await? else {
            return Err(AuthError::NotFound);
        };

        Ok(updated.into())
    }

    /// Delete a user by id. Admin only; succeeds even when the row is
    /// already gone.
    pub async fn delete_user(&self, target_id: i32, token: &str) -> Result<(), AuthError> {
        self.authorized(token, Operation::DeleteUser)?;

        self.store.delete_user(target_id).await?;
        Ok(())
    }

    /// Verify the token and run the policy; any rejection denies.
    fn authorized(&self, token: &str, operation: Operation) -> Result<Claims, AuthError> {
        let claims = self.tokens.verify(token).map_err(|rejection| {
            tracing::debug!(reason = rejection.reason(), "token rejected");
            AuthError::Unauthorized
        })?;

        if !authorize(&claims, operation) {
            tracing::debug!(
                user_id = claims.user_id,
                role = %claims.role,
                ?operation,
                "operation denied by policy"
            );
            return Err(AuthError::Unauthorized);
        }

        Ok(claims)
    }

    fn hash_password(&self, plaintext: &str) -> Result<String, AuthError> {
        password::hash(plaintext, self.bcrypt_cost).map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AuthError::Server
        })
    }
}
