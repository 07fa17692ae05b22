//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /api/employees
//!   POST   /api/employees
//!   PUT    /api/employees/{id}
//!   DELETE /api/employees/{id}
//!   GET    /api/departments

use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;

pub mod error;
pub mod handlers;

#[cfg(test)]
mod handler_tests;

/// How lookups that match no row behave.
///
/// Permissive mode treats a missing id or an unknown department name as a
/// quiet success; strict mode signals it.  Selected at startup, never per
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Missing id: update returns a null body, delete returns 204.
    /// Unknown department name: employee is stored without a department.
    #[default]
    Permissive,
    /// Missing id → 404.  Unknown department name → 422.
    Strict,
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub lookup_mode: LookupMode,
}

/// Build the application router with all routes under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            get(handlers::employees::list).post(handlers::employees::create),
        )
        .route(
            "/api/employees/:id",
            put(handlers::employees::update).delete(handlers::employees::delete),
        )
        .route("/api/departments", get(handlers::departments::list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve requests until ctrl-c, then close the pool.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let pool = state.pool.clone();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down; closing database pool");
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
}
