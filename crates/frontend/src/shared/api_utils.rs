//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build-time override of the backend origin, e.g. `http://localhost:3000`
const API_BASE_OVERRIDE: Option<&str> = option_env!("ORDERS_API_BASE");

/// Get the base URL for API requests
///
/// Uses `ORDERS_API_BASE` when it was set at build time, otherwise the
/// origin of the current page (the backend is served from the same host).
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/orders");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "/api/orders"), "/api/orders");
        assert_eq!(
            join_url("http://localhost:3000/", "/api/orders"),
            "http://localhost:3000/api/orders"
        );
        assert_eq!(
            join_url("http://localhost:3000", "api/orders/ORD-1"),
            "http://localhost:3000/api/orders/ORD-1"
        );
    }
}
