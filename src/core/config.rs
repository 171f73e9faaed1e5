//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, pkg dir) still come from
//! `[package.metadata.leptos]` and `LEPTOS_*` variables.

use crate::core::content::DEFAULT_SITE_URL;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public base URL of the site, used for the canonical link and `og:url`
    /// Example: https://safeoil.vn/
    pub site_url: Option<String>,

    /// Serve `.br`/`.gz` variants of the hydration bundle when present
    pub precompressed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            site_url: lookup("SITE_URL").filter(|url| !url.trim().is_empty()),
            precompressed: lookup("SAFEOIL_PRECOMPRESSED")
                .map(|value| parse_flag(&value))
                .unwrap_or(true),
        }
    }

    /// Check if a public URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Public URL, falling back to the production domain
    pub fn site_url(&self) -> &str {
        self.site_url.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `0`, `false`, `off` and `no` disable a flag; anything else enables it
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("SITE_URL", "https://staging.safeoil.vn/"),
            ("SAFEOIL_PRECOMPRESSED", "false"),
        ]));

        assert_eq!(
            config.site_url,
            Some("https://staging.safeoil.vn/".to_string())
        );
        assert!(!config.precompressed);
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert!(config.site_url.is_none());
        assert!(config.precompressed);
    }

    #[test]
    fn test_has_site_url() {
        let with = Config::from_lookup(lookup_from(&[("SITE_URL", "https://safeoil.vn/")]));
        let without = Config::from_lookup(lookup_from(&[]));

        assert!(with.has_site_url());
        assert!(!without.has_site_url());
    }

    #[test]
    fn test_blank_site_url_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("SITE_URL", "   ")]));

        assert!(!config.has_site_url());
        assert_eq!(config.site_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_site_url_fallback() {
        let config = Config {
            site_url: None,
            precompressed: true,
        };

        assert_eq!(config.site_url(), "https://safeoil.vn/");
    }

    #[test]
    fn test_precompressed_flag_values() {
        for off in ["0", "false", "FALSE", "off", " no "] {
            let config = Config::from_lookup(lookup_from(&[("SAFEOIL_PRECOMPRESSED", off)]));
            assert!(!config.precompressed, "{off:?} should disable");
        }
        for on in ["1", "true", "on", "yes"] {
            let config = Config::from_lookup(lookup_from(&[("SAFEOIL_PRECOMPRESSED", on)]));
            assert!(config.precompressed, "{on:?} should enable");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.has_site_url();
        let _ = config.site_url();
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            site_url: Some("https://safeoil.vn/".to_string()),
            precompressed: true,
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("site_url"));
        assert!(debug_str.contains("precompressed"));
    }
}
