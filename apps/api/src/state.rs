use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::export::pdf::PdfRenderer;
use crate::preview::PreviewSessions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable PDF backend. Default: BrowserPrintRenderer. Swap via PDF_RENDER_URL.
    pub pdf_renderer: Arc<dyn PdfRenderer>,
    /// Live preview sessions for anonymous builders.
    pub previews: PreviewSessions,
}

impl AppState {
    pub fn new(config: Config, pdf_renderer: Arc<dyn PdfRenderer>) -> Self {
        let previews = PreviewSessions::new(
            Duration::from_millis(config.preview_debounce_ms),
            config.preview_max_sessions,
            Duration::from_secs(config.preview_idle_ttl_secs),
        );
        Self {
            config,
            pdf_renderer,
            previews,
        }
    }

    /// Default configuration with the browser-print backend.
    #[cfg(test)]
    pub fn with_defaults() -> Self {
        Self::new(
            Config::default(),
            Arc::new(crate::export::pdf::BrowserPrintRenderer),
        )
    }
}
