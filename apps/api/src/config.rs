use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub preview_debounce_ms: u64,
    pub preview_max_sessions: usize,
    /// Sessions untouched for this long are evicted.
    pub preview_idle_ttl_secs: u64,
    /// Base URL of a Gotenberg-compatible Chromium service. Unset: browser print.
    pub pdf_render_url: Option<String>,
    pub pdf_render_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            preview_debounce_ms: parse_env("PREVIEW_DEBOUNCE_MS", 300)?,
            preview_max_sessions: parse_env("PREVIEW_MAX_SESSIONS", 1000)?,
            preview_idle_ttl_secs: parse_env("PREVIEW_IDLE_TTL_SECS", 1800)?,
            pdf_render_url: std::env::var("PDF_RENDER_URL")
                .ok()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            pdf_render_timeout_secs: parse_env("PDF_RENDER_TIMEOUT_SECS", 60)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            preview_debounce_ms: 300,
            preview_max_sessions: 1000,
            preview_idle_ttl_secs: 1800,
            pdf_render_url: None,
            pdf_render_timeout_secs: 60,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}
