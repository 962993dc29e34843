//! Mood NFT Metadata Service
//!
//! Serves ERC-721 metadata for Mood NFTs. Every request regenerates the
//! token's artwork from its id and the current time bucket; nothing is
//! stored between requests.
//!
//! ## Endpoints
//!
//! - `GET /metadata/{token_id}` - Metadata JSON with the SVG inlined as a data URI
//! - `GET /api/metadata/{token_id}` - Same, under the path the web app uses
//! - `GET /health` - Health check

pub mod config;
pub mod handlers;

use axum::{routing::get, Router};
use mood_art::MetadataSource;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::Config;

/// Application state shared across handlers
pub struct AppState {
    pub source: Arc<dyn MetadataSource>,
}

impl AppState {
    pub fn new(source: impl MetadataSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_handler))
        // Token metadata
        .route("/metadata/{token_id}", get(handlers::metadata_handler))
        .route("/api/metadata/{token_id}", get(handlers::metadata_handler))
        // Middleware
        .layer(
            CorsLayer::permissive(), // Metadata is fetched cross-origin by wallets and marketplaces
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
