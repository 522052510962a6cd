//! # Mock Provisioning Server
//!
//! A mock of the cluster-provisioning REST API, used to exercise the
//! [`provision-client`](../provision_client/index.html) crate over a real
//! wire. Built with [Axum](https://crates.io/crates/axum); state is an
//! explicitly constructed tenant worker store plus a provider record store,
//! both injected into the router so tests run against isolated instances.
//!
//! All routes except `/health` require the `Provision-UserID` and
//! `Provision-TenantID` headers and answer 401 without them, matching the
//! authentication behavior of the real server.
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/v2/identity` | Echo the identity headers |
//! | GET | `/v2/tenants` | List tenants with worker counts |
//! | PUT | `/v2/tenants/{tenant_id}` | Assign a worker count |
//! | GET | `/v2/tenants/{tenant_id}` | Get the assigned worker count |
//! | DELETE | `/v2/tenants/{tenant_id}` | Delete a tenant (idempotent) |
//! | GET | `/v2/providers` | List provider records |
//! | PUT | `/v2/providers/{name}` | Create or replace a provider |
//! | GET | `/v2/providers/{name}` | Get a provider record |
//! | DELETE | `/v2/providers/{name}` | Delete a provider record |
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers, identity middleware and router configuration |
//! | [`config`] | TOML configuration with tenant seeding |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs |
//! | [`state`] | Tenant worker store and shared application state |

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;

use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the API on the given listener until the future is dropped.
///
/// # Errors
/// Returns error if the server fails.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> Result<(), std::io::Error> {
    axum::serve(listener, api::create_router(state)).await
}
