//! Request and response types for the mock provisioning API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Identity headers echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResponse {
    /// Value of the user-identity header.
    pub user_id: String,
    /// Value of the tenant-identity header.
    pub tenant_id: String,
    /// Value of the secondary-credential header, if it was sent.
    pub api_key: Option<String>,
}

/// A machine provider record, as stored and served by the mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Unique provider name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Provider type the provisioner workers understand.
    pub provider_type: String,
    /// Fields the provisioner needs to create machines from this provider.
    #[serde(default)]
    pub provisioner_fields: HashMap<String, String>,
}

/// Worker count assigned to a tenant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TenantWorkers {
    /// Number of provisioner workers assigned to the tenant.
    pub workers: u32,
}

/// Tenant id with its assigned worker count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantSummary {
    /// Tenant identifier.
    pub id: String,
    /// Number of provisioner workers assigned to the tenant.
    pub workers: u32,
}
