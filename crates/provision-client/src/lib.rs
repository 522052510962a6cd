//! Authenticated REST client core for the cluster provisioning API.
//!
//! This crate provides the generic request/response machinery that the
//! higher-level domain clients (providers, clusters, tenants) are built on:
//! a client identity (base URL plus auth headers) derived once from
//! [`ClientConfig`], generic list/fetch/delete operations over JSON payloads,
//! and an exhaustive classification of HTTP status codes into typed failures.
//!
//! Retry, pooling and timeouts are properties of the supplied
//! [`reqwest::Client`], not of this layer.
//!
//! # Example
//!
//! ```no_run
//! use provision_client::{ClientConfig, Provider, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), provision_client::Error> {
//!     let client = RestClient::from_config(ClientConfig {
//!         host: "api.example.com".into(),
//!         port: 443,
//!         use_tls: true,
//!         api_version: "v2".into(),
//!         user_id: "alice".into(),
//!         tenant_id: "t1".into(),
//!         api_key: None,
//!     })?;
//!
//!     let providers: Vec<Provider> = client.get_all("providers").await?;
//!     println!("{} providers", providers.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{API_KEY_HEADER, ClientConfig, RestClient, TENANT_ID_HEADER, USER_ID_HEADER};
pub use error::{Error, FailureKind, classify_status};
pub use types::*;
