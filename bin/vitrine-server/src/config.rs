//! Server configuration, loaded from environment variables at startup.

use anyhow::Context;

/// Runtime configuration for vitrine-server.
///
/// The record-store endpoint and access key have no defaults: the server
/// cannot do anything without its store, so a missing value is a startup
/// failure rather than something to limp along without.  Everything else
/// falls back to a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// Base URL of the hosted record store (required).
    pub store_endpoint: String,

    /// Access key for the hosted record store (required).
    pub store_access_key: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; `None` means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI at `/swagger-ui` (default: on; disable in production).
    pub enable_swagger: bool,

    /// Admin session lifetime in hours (default: 24).
    pub session_ttl_hours: i64,

    /// How many services / projects the home preview returns (default: 3).
    pub home_preview_limit: usize,
}

impl Config {
    /// Build [`Config`] from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind_address: env_or("VITRINE_BIND", "0.0.0.0:3000"),
            store_endpoint: require("VITRINE_STORE_URL")?,
            store_access_key: require("VITRINE_STORE_KEY")?,
            log_level: env_or("VITRINE_LOG", "info"),
            log_json: flag("VITRINE_LOG_JSON", false),
            cors_allowed_origins: std::env::var("VITRINE_CORS_ORIGINS").ok(),
            enable_swagger: flag("VITRINE_ENABLE_SWAGGER", true),
            session_ttl_hours: parse_env("VITRINE_SESSION_TTL_HOURS", 24),
            home_preview_limit: parse_env("VITRINE_HOME_PREVIEW", 3),
        })
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn require(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("{key} is required"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
