//! Main entry point for the UserDesk backend.
//!
//! This file initializes the Axum web server, sets up the database
//! connection pool, and registers all API routes.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tracing_subscriber::EnvFilter;

use crate::auth::service::AccountService;
use crate::config::AppConfig;
use crate::database::queries::PgUserStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env()?;

    let pool = database::create_pool(&config.database_url).await?;
    let store = Arc::new(PgUserStore::new(pool));
    let accounts = AccountService::new(&config.auth, store);

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/api/auth", auth::routes::auth_router())
        .nest("/api/users", api::user::routes::user_router())
        .with_state(AppState::new(accounts));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn root_handler() -> &'static str {
    "Welcome to UserDesk!"
}
