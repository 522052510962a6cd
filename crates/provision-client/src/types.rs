//! Domain payload records exchanged with the provisioning API.
//!
//! These are plain immutable records with value equality. The client core
//! never depends on them; they are only ever the generic `T` of the
//! resource operations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;


/// A machine provider (openstack, aws, rackspace, ...) that can provision
/// nodes on behalf of a tenant.
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
    /// Absent in the wire form when empty.
    #[serde(default)]
    pub provisioner_fields: HashMap<String, String>,
}

/// Worker count assigned to a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantWorkers {
    /// Number of provisioner workers assigned to the tenant.
    pub workers: u32,
}

/// Tenant id plus its assigned worker count, as returned by tenant listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSummary {
    /// Tenant identifier.
    pub id: String,
    /// Number of provisioner workers assigned to the tenant.
    pub workers: u32,
}
