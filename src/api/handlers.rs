//! API request handlers.

use crate::api::middleware::{API_KEY_HEADER, TENANT_ID_HEADER, USER_ID_HEADER};
use crate::error::ApiError;
use crate::models::{HealthResponse, IdentityResponse, Provider, TenantSummary, TenantWorkers};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Identity
// ============================================================================

/// Echoes the identity headers back to the caller.
pub async fn get_identity(headers: HeaderMap) -> Json<IdentityResponse> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    Json(IdentityResponse {
        user_id: header(USER_ID_HEADER).unwrap_or_default(),
        tenant_id: header(TENANT_ID_HEADER).unwrap_or_default(),
        api_key: header(API_KEY_HEADER),
    })
}

// ============================================================================
// Tenants
// ============================================================================

/// Lists all tenants with their assigned worker counts.
pub async fn list_tenants(State(state): State<Arc<AppState>>) -> Json<Vec<TenantSummary>> {
    let tenants = state
        .tenants
        .tenants()
        .into_iter()
        .map(|(id, workers)| TenantSummary { id, workers })
        .collect();
    Json(tenants)
}

/// Gets the worker count assigned to a tenant.
pub async fn get_tenant(
    State(state): State<Arc<AppState>>,
    Path(tenant_id): Path<String>,
) -> Result<Json<TenantWorkers>, ApiError> {
    state
        .tenants
        .assigned_workers(&tenant_id)
        .map(|workers| Json(TenantWorkers { workers }))
        .ok_or(ApiError::TenantNotFound(tenant_id))
}

/// Sets the worker count assigned to a tenant.
pub async fn put_tenant(
    State(state): State<Arc<AppState>>,
    Path(tenant_id): Path<String>,
    Json(body): Json<TenantWorkers>,
) -> StatusCode {
    debug!(
        "Request to set num workers for tenant {} to {}",
        tenant_id, body.workers
    );
    // Skip the write when the count is unchanged.
    if state.tenants.assigned_workers(&tenant_id) != Some(body.workers) {
        state.tenants.set_assigned_workers(&tenant_id, body.workers);
    }
    StatusCode::OK
}

/// Deletes a tenant. Deleting an unknown tenant still succeeds.
pub async fn delete_tenant(
    State(state): State<Arc<AppState>>,
    Path(tenant_id): Path<String>,
) -> StatusCode {
    debug!("Received request to delete tenant {}", tenant_id);
    state.tenants.delete_tenant(&tenant_id);
    StatusCode::OK
}

// ============================================================================
// Providers
// ============================================================================

/// Lists all provider records.
pub async fn list_providers(State(state): State<Arc<AppState>>) -> Json<Vec<Provider>> {
    let mut providers: Vec<Provider> = state
        .providers
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    providers.sort_by(|a, b| a.name.cmp(&b.name));
    Json(providers)
}

/// Gets a provider record by name.
pub async fn get_provider(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Provider>, ApiError> {
    state
        .providers
        .get(&name)
        .map(|entry| Json(entry.value().clone()))
        .ok_or(ApiError::ProviderNotFound(name))
}

/// Creates or replaces a provider record.
pub async fn put_provider(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(provider): Json<Provider>,
) -> Result<StatusCode, ApiError> {
    if provider.name != name {
        return Err(ApiError::InvalidRequest(format!(
            "provider name {} does not match path {}",
            provider.name, name
        )));
    }
    state.providers.insert(name, provider);
    Ok(StatusCode::OK)
}

/// Deletes a provider record by name.
pub async fn delete_provider(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .providers
        .remove(&name)
        .map(|_| StatusCode::OK)
        .ok_or(ApiError::ProviderNotFound(name))
}
