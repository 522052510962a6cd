//! API middleware for identity-header authentication.

use crate::error::ApiError;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Header carrying the user identity.
pub const USER_ID_HEADER: &str = "Provision-UserID";
/// Header carrying the tenant identity.
pub const TENANT_ID_HEADER: &str = "Provision-TenantID";
/// Optional secondary-credential header.
pub const API_KEY_HEADER: &str = "Provision-ApiKey";

/// Identity middleware.
///
/// Rejects requests that carry no user or tenant identity header with 401,
/// the way the real provisioning server authenticates its callers. The
/// health endpoint is exempt.
pub async fn require_identity(request: Request<Body>, next: Next) -> Response {
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let missing_identity = {
        let has_header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| !value.is_empty())
        };

        !has_header(USER_ID_HEADER) || !has_header(TENANT_ID_HEADER)
    };

    if missing_identity {
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}
