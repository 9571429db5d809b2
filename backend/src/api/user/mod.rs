//! Module for user account management API endpoints.
//!
//! This module handles role-gated account operations that are distinct
//! from the core authentication process: registration, listing, sparse
//! updates and deletion.

pub mod handlers;
pub mod routes;
