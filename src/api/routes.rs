//! Route configuration.

use crate::api::{handlers, middleware};
use crate::state::AppState;
use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, put};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Identity echo
        .route("/v2/identity", get(handlers::get_identity))
        // Tenants
        .route("/v2/tenants", get(handlers::list_tenants))
        .route(
            "/v2/tenants/{tenant_id}",
            put(handlers::put_tenant)
                .get(handlers::get_tenant)
                .delete(handlers::delete_tenant),
        )
        // Providers
        .route("/v2/providers", get(handlers::list_providers))
        .route(
            "/v2/providers/{name}",
            put(handlers::put_provider)
                .get(handlers::get_provider)
                .delete(handlers::delete_provider),
        )
        .layer(from_fn(middleware::require_identity))
        .with_state(state)
}
