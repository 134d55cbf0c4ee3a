// Portfolio server binary entry point
//
// Usage: cargo run --bin portfolio_server
// Configuration: PORTFOLIO_DATA, PORTFOLIO_STATIC_DIR, PORT, RUST_LOG

use portfolio_site::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORTFOLIO_DATA: {}", config.data_path.display());
    match &config.static_dir {
        Some(dir) => tracing::info!("  PORTFOLIO_STATIC_DIR: {}", dir.display()),
        None => tracing::info!("  PORTFOLIO_STATIC_DIR: (none)"),
    }
    tracing::info!("  PORT: {}", config.port);

    if !config.data_path.exists() {
        // Not fatal: pages render their load-failure state until the file appears
        tracing::warn!("Project data not found at {}", config.data_path.display());
    }

    let app = create_router(AppState::from_config(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
