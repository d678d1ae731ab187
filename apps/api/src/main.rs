mod config;
mod errors;
mod export;
mod extract;
mod models;
mod preview;
mod render;
mod routes;
mod state;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::pdf::{BrowserPrintRenderer, ChromiumServiceRenderer, PdfRenderer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::TEMPLATES;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));
    info!("Template catalog loaded ({} templates)", TEMPLATES.len());

    // Initialize PDF backend (browser print unless a Chromium service is configured)
    let pdf_renderer = build_pdf_renderer(&config)?;
    info!("PDF backend: {}", pdf_renderer.backend());

    info!(
        "Preview debounce {}ms, max {} sessions",
        config.preview_debounce_ms, config.preview_max_sessions
    );

    // Build app state
    let state = AppState::new(config.clone(), pdf_renderer);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the builder frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_pdf_renderer(config: &Config) -> Result<Arc<dyn PdfRenderer>> {
    match &config.pdf_render_url {
        Some(url) => {
            let renderer = ChromiumServiceRenderer::new(
                url,
                Duration::from_secs(config.pdf_render_timeout_secs),
            )?;
            info!("Chromium PDF service at {url}");
            Ok(Arc::new(renderer))
        }
        None => Ok(Arc::new(BrowserPrintRenderer)),
    }
}
