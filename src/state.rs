//! Application state management.

use crate::config::Config;
use crate::models::Provider;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

/// Tenant-keyed store of assigned provisioner worker counts.
///
/// An explicitly constructed instance is injected into the router state, so
/// every server (and every test) gets its own isolated store.
#[derive(Clone, Default)]
pub struct TenantWorkerStore {
    assigned: Arc<DashMap<String, u32>>,
}

impl TenantWorkerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Worker count assigned to a tenant, if the tenant is known.
    #[must_use]
    pub fn assigned_workers(&self, tenant_id: &str) -> Option<u32> {
        self.assigned.get(tenant_id).map(|entry| *entry)
    }

    /// Assigns a worker count to a tenant, creating the tenant if needed.
    pub fn set_assigned_workers(&self, tenant_id: &str, workers: u32) {
        self.assigned.insert(tenant_id.to_string(), workers);
    }

    /// Removes a tenant from the store. Unknown tenants are a no-op.
    pub fn delete_tenant(&self, tenant_id: &str) {
        self.assigned.remove(tenant_id);
    }

    /// All known tenants with their worker counts, sorted by id so listings
    /// are stable.
    #[must_use]
    pub fn tenants(&self) -> Vec<(String, u32)> {
        let mut tenants: Vec<(String, u32)> = self
            .assigned
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        tenants.sort_by(|a, b| a.0.cmp(&b.0));
        tenants
    }
}

/// Application state shared across all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Worker counts per tenant.
    pub tenants: TenantWorkerStore,
    /// Provider records keyed by name.
    pub providers: Arc<DashMap<String, Provider>>,
}

impl AppState {
    /// Creates empty application state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates application state seeded from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let state = Self::new();
        for tenant in &config.tenants {
            state
                .tenants
                .set_assigned_workers(&tenant.id, tenant.workers);
            info!("Seeded tenant {} with {} workers", tenant.id, tenant.workers);
        }
        state
    }
}
