//! Mock Provisioning Server
//!
//! REST API mock of the cluster-provisioning service, for exercising the
//! provision client against a real wire.

use provision_mock_server::api::create_router;
use provision_mock_server::config::Config;
use provision_mock_server::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration when a path is given, otherwise run with defaults
    let config = match std::env::var("PROVISION_CONFIG") {
        Ok(path) => Config::load(path)?,
        Err(_) => Config::default(),
    };

    // Create application state seeded from configuration
    let state = Arc::new(AppState::from_config(&config));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Mock provisioning server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
