//! Mood NFT Metadata Service
//!
//! REST API serving procedurally generated token metadata

use anyhow::{Context, Result};
use metadata_service::{create_router, AppState, Config};
use mood_art::MetadataGenerator;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metadata_service=debug,mood_art=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Metadata Service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded - listening on {}, seed window {}ms",
        config.api_address(),
        config.seed_window_ms
    );

    // Create application state
    let state = AppState::new(MetadataGenerator::new(config.seed_window_ms));

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.api_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.api_address()))?;

    info!("Metadata Service running on http://{}", config.api_address());
    info!("  GET /metadata/{{token_id}}");
    info!("  GET /api/metadata/{{token_id}}");
    info!("  GET /health");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
