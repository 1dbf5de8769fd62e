//! CORS policy from `VITRINE_CORS_ORIGINS`.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for the configured origin list.  Anything that
/// amounts to a wildcard falls back to allow-any, which suits local
/// development; production deployments should pin the site's origins.
pub fn cors_layer(allowed: Option<&str>) -> CorsLayer {
    let allow = match allowed.and_then(origin_list) {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::any(),
    };
    CorsLayer::new()
        .allow_origin(allow)
        .allow_headers(Any)
        .allow_methods(Any)
}

/// Parse the comma-separated origin list.  `None` means wildcard: the list
/// is empty, contains a literal `*`, or holds no parsable origin.  A `*`
/// entry must short-circuit here because `AllowOrigin::list` rejects it.
fn origin_list(raw: &str) -> Option<Vec<HeaderValue>> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if entries.iter().any(|entry| *entry == "*") {
        return None;
    }
    let origins: Vec<HeaderValue> = entries
        .iter()
        .filter_map(|entry| entry.parse().ok())
        .collect();
    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
