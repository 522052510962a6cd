//! Generic authenticated client for the provisioning REST API.

use crate::error::{Error, classify_status};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Header carrying the user identity on every request.
pub const USER_ID_HEADER: &str = "Provision-UserID";
/// Header carrying the tenant identity on every request.
pub const TENANT_ID_HEADER: &str = "Provision-TenantID";
/// Optional secondary-credential header, sent iff an API key is configured.
pub const API_KEY_HEADER: &str = "Provision-ApiKey";

/// Connection parameters for a [`RestClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server host name or address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Use HTTPS instead of HTTP.
    pub use_tls: bool,
    /// API version path segment (e.g. "v2").
    pub api_version: String,
    /// User identity sent with every request. Must be non-empty.
    pub user_id: String,
    /// Tenant identity sent with every request. Must be non-empty.
    pub tenant_id: String,
    /// Optional secondary credential.
    pub api_key: Option<String>,
}

/// Generic authenticated client for the provisioning REST API.
///
/// The base URL and auth header set are derived from [`ClientConfig`] exactly
/// once at construction and stay fixed for the client's lifetime, so a single
/// instance can be cloned and shared across tasks without synchronization.
/// Domain clients (providers, clusters, tenants) build their operations on
/// top of [`get_all`](Self::get_all), [`get_single`](Self::get_single),
/// [`delete`](Self::delete) and [`attach_body`](Self::attach_body).
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
    auth_headers: HeaderMap,
}

impl RestClient {
    /// Creates a client from validated configuration and an externally
    /// supplied transport. No network I/O happens here.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the user or tenant id is empty, or if a
    /// credential cannot be encoded as a header value.
    pub fn new(config: ClientConfig, http: Client) -> Result<Self, Error> {
        if config.user_id.is_empty() {
            return Err(Error::Config("user id must not be empty".to_string()));
        }
        if config.tenant_id.is_empty() {
            return Err(Error::Config("tenant id must not be empty".to_string()));
        }

        let scheme = if config.use_tls { "https" } else { "http" };
        let base_url = format!(
            "{}://{}:{}/{}",
            scheme, config.host, config.port, config.api_version
        );
        let auth_headers = build_auth_headers(&config)?;

        Ok(Self {
            http,
            base_url,
            auth_headers,
        })
    }

    /// Creates a client with a default transport.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        Self::new(config, Client::new())
    }

    /// Base URL of the REST service API, `scheme://host:port/version`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a full request URL by appending a raw postfix to the base URL.
    #[must_use]
    pub fn full_url(&self, postfix: &str) -> String {
        format!("{}{}", self.base_url, postfix)
    }

    /// Starts a request with the given method. An absolute `http(s)://`
    /// target is used as-is; anything else is taken as a suffix of the
    /// base URL.
    ///
    /// Resource paths are composed by plain string concatenation; callers
    /// are responsible for targets that need no further encoding.
    pub fn request(&self, method: Method, target: &str) -> RequestBuilder {
        let url = if target.starts_with("http://") || target.starts_with("https://") {
            target.to_string()
        } else {
            format!("{}/{}", self.base_url, target)
        };
        self.http.request(method, url)
    }

    /// Executes a request with the client's auth headers attached.
    ///
    /// Every header of the auth set is added unconditionally; callers must
    /// not set those header names themselves. The raw response is handed
    /// back to the caller, who owns it on every path from here on.
    ///
    /// # Errors
    /// Returns [`Error::Transport`] if the transport cannot complete the
    /// exchange.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response, Error> {
        let request = self.apply_auth(request).build()?;
        debug!("executing {} {}", request.method(), request.url());
        Ok(self.http.execute(request).await?)
    }

    /// Fetches `base_url/suffix` and deserializes the body as a list of `T`.
    ///
    /// An empty body or a JSON `null` yields an empty vector, never an
    /// absent result, regardless of how the codec treats nulls.
    ///
    /// # Errors
    /// Returns the classified failure for non-200 statuses, or
    /// [`Error::Json`] if the body does not decode as a list of `T`.
    pub async fn get_all<T: DeserializeOwned>(&self, url_suffix: &str) -> Result<Vec<T>, Error> {
        let response = self.execute(self.request(Method::GET, url_suffix)).await?;
        classify_status(response.status())?;
        let body = response.text().await?;
        decode_list(&body)
    }

    /// Fetches `base_url/suffix/name` and deserializes the body as one `T`.
    ///
    /// # Errors
    /// Returns the classified failure for non-200 statuses — a missing
    /// resource surfaces as [`FailureKind::NotFound`](crate::FailureKind)
    /// before any deserialization is attempted — or [`Error::Json`] if the
    /// body does not decode as `T`.
    pub async fn get_single<T: DeserializeOwned>(
        &self,
        url_suffix: &str,
        name: &str,
    ) -> Result<T, Error> {
        let response = self
            .execute(self.request(Method::GET, &format!("{}/{}", url_suffix, name)))
            .await?;
        classify_status(response.status())?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Deletes `base_url/suffix/name`, discarding any response body.
    ///
    /// # Errors
    /// Returns the classified failure for non-200 statuses.
    pub async fn delete(&self, url_suffix: &str, name: &str) -> Result<(), Error> {
        let response = self
            .execute(self.request(Method::DELETE, &format!("{}/{}", url_suffix, name)))
            .await?;
        // Dropping the response without reading the body releases the
        // connection.
        classify_status(response.status())
    }

    /// Attaches an optional JSON payload to a request.
    ///
    /// With `None` the request is returned untouched and carries no payload;
    /// otherwise the value's JSON text form becomes the UTF-8 body and the
    /// content type is set accordingly.
    ///
    /// # Errors
    /// Returns [`Error::Json`] if the body cannot be serialized.
    pub fn attach_body<T: Serialize>(
        &self,
        request: RequestBuilder,
        body: Option<&T>,
    ) -> Result<RequestBuilder, Error> {
        match body {
            None => Ok(request),
            Some(value) => {
                let json = serde_json::to_string(value)?;
                debug!(bytes = json.len(), "attached JSON request body");
                Ok(request
                    .header(CONTENT_TYPE, "application/json")
                    .body(json))
            }
        }
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request.headers(self.auth_headers.clone())
    }
}

/// Decodes a response body as a list of `T`.
///
/// An empty body and a JSON `null` both decode to an empty vector, so list
/// operations never hand back an absent result whatever the codec does with
/// nulls.
fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<T>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}

/// Builds the auth header set exactly once, at client construction.
fn build_auth_headers(config: &ClientConfig) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_ID_HEADER, header_value(&config.user_id, "user id")?);
    headers.insert(
        TENANT_ID_HEADER,
        header_value(&config.tenant_id, "tenant id")?,
    );
    if let Some(key) = config.api_key.as_deref()
        && !key.is_empty()
    {
        headers.insert(API_KEY_HEADER, header_value(key, "api key")?);
    }
    Ok(headers)
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Config(format!("{what} is not a valid header value")))
}
