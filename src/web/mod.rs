// Presentation layer: askama templates served by axum

pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

pub use router::app_router;
pub use state::AppState;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use std::sync::Arc;
use tracing::info;

/// Start the HTTP server and run until it stops
pub async fn start_server(config: &Config, catalog: Arc<Catalog>) -> Result<()> {
    let addr = config.bind_addr()?;
    let state = AppState::new(catalog, config.catalog.strict_categories);
    let app = app_router(state, &config.server.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("HTTP server running on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
