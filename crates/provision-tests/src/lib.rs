//! Integration tests for the provision client against the mock server.
//!
//! Each test spawns its own mock provisioning server in-process on an
//! ephemeral port, so tests run isolated and need no external setup.

use provision_client::{ClientConfig, RestClient};
use provision_mock_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

/// Spawns a mock provisioning server on an ephemeral port and returns its
/// address. The server task runs until the test process exits.
///
/// # Panics
/// Panics if the listener cannot be bound.
pub async fn spawn_mock_server() -> SocketAddr {
    let state = Arc::new(AppState::new());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(provision_mock_server::run(listener, state));

    addr
}

/// Client configuration pointing at a spawned mock server.
#[must_use]
pub fn test_config(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        use_tls: false,
        api_version: "v2".to_string(),
        user_id: "alice".to_string(),
        tenant_id: "superadmin".to_string(),
        api_key: None,
    }
}

/// Creates a test client configured for a spawned mock server.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client(addr: SocketAddr) -> Result<RestClient, provision_client::Error> {
    RestClient::new(test_config(addr), reqwest::Client::new())
}

/// Generates a unique resource name to avoid conflicts between tests.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}_{}_{}", prefix, ts, counter)
}
