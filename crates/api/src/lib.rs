//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for the registry workflows
//! - Authentication middleware for administrator sessions
//! - The public verification endpoint with its degraded-read snapshot

pub mod middleware;
pub mod routes;
pub mod snapshot;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use nagorik_core::certificate::JurisdictionCodes;
use nagorik_shared::config::RegistryConfig;
use nagorik_shared::{EmailService, JwtService};
use snapshot::VerificationSnapshot;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for session tokens.
    pub jwt_service: Arc<JwtService>,
    /// Email service for passcode delivery.
    pub email_service: Arc<EmailService>,
    /// Registry office configuration.
    pub registry: Arc<RegistryConfig>,
    /// Validated jurisdiction code pair for certificate numbers.
    pub codes: JurisdictionCodes,
    /// Snapshot cache backing the public lookup when the store is down.
    pub verification_snapshot: VerificationSnapshot,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
