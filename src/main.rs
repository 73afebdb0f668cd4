//! AlgoLens - Application Entry Point
//!
//! Serves the estimation engine over HTTP.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algolens::{config::CONFIG, handlers, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AlgoLens server...");

    let state = AppState::new(CONFIG.clone());
    let app = handlers::app(state);

    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        max_body_bytes = CONFIG.limits.max_body_bytes,
        request_timeout_secs = CONFIG.limits.request_timeout_secs,
        "Server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
