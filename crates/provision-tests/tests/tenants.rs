//! Tenant worker-count operation tests.

use provision_client::{Error, FailureKind, TenantSummary, TenantWorkers, classify_status};
use provision_tests::{create_test_client, spawn_mock_server, unique_name};
use reqwest::Method;

async fn put_workers(
    client: &provision_client::RestClient,
    tenant_id: &str,
    workers: u32,
) -> Result<(), Error> {
    let request = client.attach_body(
        client.request(Method::PUT, &format!("tenants/{tenant_id}")),
        Some(&TenantWorkers { workers }),
    )?;
    let response = client.execute(request).await?;
    classify_status(response.status())
}

#[tokio::test]
async fn test_tenant_workers_round_trip() {
    let addr = spawn_mock_server().await;
    let client = create_test_client(addr).expect("Failed to create client");
    let tenant_id = unique_name("tenant");

    put_workers(&client, &tenant_id, 5)
        .await
        .expect("Failed to assign workers");

    let workers: TenantWorkers = client
        .get_single("tenants", &tenant_id)
        .await
        .expect("Failed to get tenant");
    assert_eq!(workers.workers, 5);

    let tenants: Vec<TenantSummary> = client
        .get_all("tenants")
        .await
        .expect("Failed to list tenants");
    assert!(
        tenants
            .iter()
            .any(|t| t.id == tenant_id && t.workers == 5)
    );

    client
        .delete("tenants", &tenant_id)
        .await
        .expect("Failed to delete tenant");

    let result = client.get_single::<TenantWorkers>("tenants", &tenant_id).await;
    assert!(matches!(
        result,
        Err(Error::Http {
            kind: FailureKind::NotFound,
            status: 404,
            ..
        })
    ));
}

#[tokio::test]
async fn test_reassigning_same_worker_count_succeeds() {
    let addr = spawn_mock_server().await;
    let client = create_test_client(addr).expect("Failed to create client");
    let tenant_id = unique_name("tenant");

    put_workers(&client, &tenant_id, 3)
        .await
        .expect("Failed to assign workers");
    put_workers(&client, &tenant_id, 3)
        .await
        .expect("Unchanged assignment should succeed");

    let workers: TenantWorkers = client
        .get_single("tenants", &tenant_id)
        .await
        .expect("Failed to get tenant");
    assert_eq!(workers.workers, 3);
}

#[tokio::test]
async fn test_deleting_unknown_tenant_succeeds() {
    let addr = spawn_mock_server().await;
    let client = create_test_client(addr).expect("Failed to create client");

    client
        .delete("tenants", "never-created")
        .await
        .expect("Tenant delete should be idempotent");
}

#[tokio::test]
async fn test_get_unknown_tenant_is_not_found() {
    let addr = spawn_mock_server().await;
    let client = create_test_client(addr).expect("Failed to create client");

    let result = client
        .get_single::<TenantWorkers>("tenants", "never-created")
        .await;

    assert!(matches!(
        result,
        Err(Error::Http {
            kind: FailureKind::NotFound,
            status: 404,
            ..
        })
    ));
}
