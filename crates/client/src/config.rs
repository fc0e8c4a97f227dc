//! Endpoint configuration.
//!
//! The API origin comes from the environment. On wasm it is baked in at
//! compile time via `GIGLANCE_API_URL`; on desktop a runtime variable of the
//! same name wins. The push-channel origin is derived from the API origin by
//! stripping the `/api` path suffix and switching the scheme to ws(s).

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Base URL for REST calls, without a trailing slash.
pub fn api_base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("GIGLANCE_API_URL") {
        if !url.trim().is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    option_env!("GIGLANCE_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// WebSocket URL for the push channel.
pub fn push_url() -> String {
    let base = api_base_url();
    let origin = base.strip_suffix("/api").unwrap_or(&base);
    http_to_ws(origin)
}

fn http_to_ws(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        format!("ws://{}", url)
    }
}

/// Join a path onto a base URL, normalizing slashes.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_origin_strips_api_suffix_and_swaps_scheme() {
        assert_eq!(http_to_ws("http://localhost:5000"), "ws://localhost:5000");
        assert_eq!(
            http_to_ws("https://giglance.example.com"),
            "wss://giglance.example.com"
        );
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:5000/api/", "/gigs"),
            "http://localhost:5000/api/gigs"
        );
        assert_eq!(
            join_url("http://localhost:5000/api", "gigs/g1"),
            "http://localhost:5000/api/gigs/g1"
        );
    }
}
