//! Unit tests for client module.

use super::*;

fn test_config() -> ClientConfig {
    ClientConfig {
        host: "api.example.com".to_string(),
        port: 8080,
        use_tls: false,
        api_version: "v2".to_string(),
        user_id: "alice".to_string(),
        tenant_id: "t1".to_string(),
        api_key: None,
    }
}

fn test_client(config: ClientConfig) -> RestClient {
    RestClient::new(config, Client::new()).expect("client should build")
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_base_url_with_tls() {
    let client = test_client(ClientConfig {
        port: 443,
        use_tls: true,
        ..test_config()
    });

    assert_eq!(client.base_url(), "https://api.example.com:443/v2");
}

#[test]
fn test_base_url_plain_http() {
    let client = test_client(test_config());

    assert_eq!(client.base_url(), "http://api.example.com:8080/v2");
}

#[test]
fn test_base_url_stable_across_reads() {
    let client = test_client(test_config());

    let first = client.base_url().to_string();
    for _ in 0..10 {
        assert_eq!(client.base_url().as_bytes(), first.as_bytes());
    }
}

#[test]
fn test_empty_user_id_rejected() {
    let result = RestClient::new(
        ClientConfig {
            user_id: String::new(),
            ..test_config()
        },
        Client::new(),
    );

    match result {
        Err(Error::Config(message)) => assert!(message.contains("user id")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_empty_tenant_id_rejected() {
    let result = RestClient::new(
        ClientConfig {
            tenant_id: String::new(),
            ..test_config()
        },
        Client::new(),
    );

    match result {
        Err(Error::Config(message)) => assert!(message.contains("tenant id")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_empty_identity_rejected_regardless_of_other_fields() {
    // Otherwise-valid configs with an api key still fail on empty identity.
    let configs = [
        ClientConfig {
            user_id: String::new(),
            api_key: Some("key".to_string()),
            ..test_config()
        },
        ClientConfig {
            tenant_id: String::new(),
            use_tls: true,
            api_key: Some("key".to_string()),
            ..test_config()
        },
        ClientConfig {
            user_id: String::new(),
            tenant_id: String::new(),
            ..test_config()
        },
    ];

    for config in configs {
        assert!(matches!(
            RestClient::new(config, Client::new()),
            Err(Error::Config(_))
        ));
    }
}

#[test]
fn test_non_ascii_identity_rejected() {
    let result = RestClient::new(
        ClientConfig {
            user_id: "ali\nce".to_string(),
            ..test_config()
        },
        Client::new(),
    );

    assert!(matches!(result, Err(Error::Config(_))));
}

// ============================================================================
// Auth Header Tests
// ============================================================================

#[test]
fn test_auth_headers_without_api_key() {
    let client = test_client(test_config());

    assert_eq!(client.auth_headers.len(), 2);
    assert_eq!(client.auth_headers.get(USER_ID_HEADER).unwrap(), "alice");
    assert_eq!(client.auth_headers.get(TENANT_ID_HEADER).unwrap(), "t1");
    assert!(client.auth_headers.get(API_KEY_HEADER).is_none());
}

#[test]
fn test_auth_headers_with_api_key() {
    let client = test_client(ClientConfig {
        api_key: Some("secret".to_string()),
        ..test_config()
    });

    assert_eq!(client.auth_headers.len(), 3);
    assert_eq!(client.auth_headers.get(API_KEY_HEADER).unwrap(), "secret");
}

#[test]
fn test_empty_api_key_omitted() {
    let client = test_client(ClientConfig {
        api_key: Some(String::new()),
        ..test_config()
    });

    assert_eq!(client.auth_headers.len(), 2);
    assert!(client.auth_headers.get(API_KEY_HEADER).is_none());
}

#[test]
fn test_auth_headers_identical_across_requests() {
    let client = test_client(ClientConfig {
        api_key: Some("secret".to_string()),
        ..test_config()
    });

    for _ in 0..10 {
        let request = client
            .apply_auth(client.request(Method::GET, "providers"))
            .build()
            .expect("request should build");

        assert_eq!(*request.headers(), client.auth_headers);
    }
}

// ============================================================================
// URL Composition Tests
// ============================================================================

#[test]
fn test_request_url_composition() {
    let client = test_client(test_config());

    let request = client
        .request(Method::GET, "providers")
        .build()
        .expect("request should build");

    assert_eq!(
        request.url().as_str(),
        "http://api.example.com:8080/v2/providers"
    );
}

#[test]
fn test_single_resource_url_composition() {
    let client = test_client(test_config());

    let request = client
        .request(Method::DELETE, "providers/foo")
        .build()
        .expect("request should build");

    assert_eq!(
        request.url().as_str(),
        "http://api.example.com:8080/v2/providers/foo"
    );
}

#[test]
fn test_absolute_target_bypasses_base_url() {
    let client = test_client(test_config());

    let request = client
        .request(Method::GET, "http://other.example.com:9000/v1/clusters")
        .build()
        .expect("request should build");

    assert_eq!(
        request.url().as_str(),
        "http://other.example.com:9000/v1/clusters"
    );
}

#[test]
fn test_full_url_concatenates_postfix() {
    let client = test_client(test_config());

    assert_eq!(
        client.full_url("/providers"),
        "http://api.example.com:8080/v2/providers"
    );
}

// ============================================================================
// List Decoding Tests
// ============================================================================

#[test]
fn test_decode_list_empty_body_yields_empty_vec() {
    let items: Vec<crate::Provider> = decode_list("").expect("empty body should decode");
    assert!(items.is_empty());

    let items: Vec<crate::Provider> = decode_list("  \n").expect("blank body should decode");
    assert!(items.is_empty());
}

#[test]
fn test_decode_list_null_yields_empty_vec() {
    let items: Vec<crate::Provider> = decode_list("null").expect("null should decode");
    assert!(items.is_empty());
}

#[test]
fn test_decode_list_empty_array_yields_empty_vec() {
    let items: Vec<crate::Provider> = decode_list("[]").expect("empty array should decode");
    assert!(items.is_empty());
}

#[test]
fn test_decode_list_returns_items_in_order() {
    let body = r#"[
        {"name":"aws","description":"a","providerType":"aws"},
        {"name":"joyent","description":"j","providerType":"joyent"}
    ]"#;

    let items: Vec<crate::Provider> = decode_list(body).expect("list should decode");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "aws");
    assert_eq!(items[1].name, "joyent");
}

#[test]
fn test_decode_list_malformed_body_is_json_error() {
    let result: Result<Vec<crate::Provider>, Error> = decode_list("{not json");
    assert!(matches!(result, Err(Error::Json(_))));
}

// ============================================================================
// Body Attachment Tests
// ============================================================================

#[test]
fn test_attach_body_absent_leaves_no_payload() {
    let client = test_client(test_config());

    let request = client
        .attach_body::<crate::Provider>(client.request(Method::PUT, "providers/foo"), None)
        .expect("attach should succeed")
        .build()
        .expect("request should build");

    assert!(request.body().is_none());
    assert!(request.headers().get(CONTENT_TYPE).is_none());
}

#[test]
fn test_attach_body_sets_exact_json_payload() {
    let client = test_client(test_config());
    let provider = crate::Provider {
        name: "foo".to_string(),
        description: "test provider".to_string(),
        provider_type: "openstack".to_string(),
        provisioner_fields: std::collections::HashMap::new(),
    };

    let request = client
        .attach_body(client.request(Method::PUT, "providers/foo"), Some(&provider))
        .expect("attach should succeed")
        .build()
        .expect("request should build");

    let expected = serde_json::to_string(&provider).unwrap();
    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    assert_eq!(body, expected.as_bytes());
    assert_eq!(
        request.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
}
