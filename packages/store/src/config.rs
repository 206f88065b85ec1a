//! # Client configuration: `dawss.toml`
//!
//! The web binary embeds a small TOML file that tells the client where the
//! REST API lives and how long transient UI states last.
//!
//! ```toml
//! [api]
//! base_url = ""                 # empty = the page's own origin
//!
//! [ui]
//! error_timeout_secs = 5        # how long an error message stays visible
//! register_redirect_secs = 2    # pause before leaving the register page
//! ```
//!
//! Every section and field has a default, so a missing or empty file is the
//! same as the default configuration.

use std::time::Duration;

use serde::Deserialize;

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DawssConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// REST API location.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the API, without a trailing slash.
    /// Empty means the origin that served the page.
    #[serde(default)]
    pub base_url: String,
}

/// Timings for transient UI states.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_error_timeout")]
    pub error_timeout_secs: u32,
    #[serde(default = "default_register_redirect")]
    pub register_redirect_secs: u32,
}

fn default_error_timeout() -> u32 {
    5
}

fn default_register_redirect() -> u32 {
    2
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_timeout_secs: default_error_timeout(),
            register_redirect_secs: default_register_redirect(),
        }
    }
}

impl UiConfig {
    pub fn error_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.error_timeout_secs))
    }

    pub fn register_redirect_delay(&self) -> Duration {
        Duration::from_secs(u64::from(self.register_redirect_secs))
    }
}

pub const CONFIG_FILE: &str = "dawss.toml";

impl DawssConfig {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Like [`DawssConfig::parse`], but a broken file means the defaults.
    pub fn parse_or_default(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|e| {
            tracing::warn!("Invalid {CONFIG_FILE}, using defaults: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DawssConfig::parse("").unwrap();
        assert_eq!(config, DawssConfig::default());
        assert_eq!(config.ui.error_timeout(), Duration::from_secs(5));
        assert_eq!(config.ui.register_redirect_delay(), Duration::from_secs(2));
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = DawssConfig::parse(
            r#"
            [api]
            base_url = "https://prom.example.edu"

            [ui]
            error_timeout_secs = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://prom.example.edu");
        assert_eq!(config.ui.error_timeout_secs, 8);
        assert_eq!(config.ui.register_redirect_secs, 2);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(DawssConfig::parse("[ui]\nerror_timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let config = DawssConfig::parse_or_default("[ui]\nerror_timeout_secs = \"soon\"");
        assert_eq!(config, DawssConfig::default());

        let config = DawssConfig::parse_or_default("[ui]\nregister_redirect_secs = 3");
        assert_eq!(config.ui.register_redirect_secs, 3);
    }
}
