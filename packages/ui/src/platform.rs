//! Browser effects the rest of the crate goes through: full-page navigation,
//! timers, and the page origin.

use std::time::Duration;

/// Leave the current page for `path`. A full navigation, not a router push:
/// the current page's state is abandoned.
pub fn navigate_to(path: &str) {
    tracing::debug!("Navigating to {path}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("Failed to navigate to {path}: {e:?}");
            }
        }
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// The API host to use: the configured one, or the origin that served the page.
pub fn resolve_base_url(configured: &str) -> String {
    if !configured.trim().is_empty() {
        return configured.trim().to_string();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    "http://127.0.0.1:8000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_url_wins() {
        assert_eq!(
            resolve_base_url(" https://prom.example.edu "),
            "https://prom.example.edu"
        );
    }

    #[test]
    fn test_empty_base_url_falls_back() {
        assert_eq!(resolve_base_url(""), "http://127.0.0.1:8000");
    }
}
