//! Authentication module for managing user accounts, tokens, and access control.
//!
//! This module provides the public interface for user authentication-related
//! functionalities such as login, registration, token issuance and
//! verification, role-based authorization and account management.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod policy;
pub mod routes;
pub mod service;
pub mod token;

// Re-exports for convenience
pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use service::*;
pub use token::*;
