// API Server Binary Entry Point
//
// Purpose: serve the portfolio page and its fragments with Axum
// Usage: cargo run --features api --bin api_server

use portfolio_cv::{create_router, ServerState, SiteConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_cv=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = SiteConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  DATA_PATH: {}", config.data_path.display());
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CV_PAGE_SIZE: {}", config.page_size);
    tracing::info!("  CV_BATCH_SIZE: {}", config.batch_size);

    // A failed load is logged; the server still starts and serves empty sections
    let state = ServerState::new(&config).await;

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
