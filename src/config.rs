//! Site Configuration
//!
//! Resolved once at startup from build-time environment and shared through
//! Leptos context.

use leptos::prelude::*;
use tracing::Level;

const DEFAULT_API_BASE: &str = "/api";

/// Runtime settings for the site
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// REST base path, without trailing slash
    pub api_base: String,
    pub log_level: Level,
    pub featured: FeaturedLimits,
}

/// How many featured items each page promotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedLimits {
    pub gallery: usize,
    pub documents: usize,
    pub testimonials: usize,
}

impl Default for FeaturedLimits {
    fn default() -> Self {
        Self { gallery: 3, documents: 2, testimonials: 3 }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl SiteConfig {
    /// Read `MEMBER_SITE_API_BASE` and `MEMBER_SITE_LOG` as set at build time
    pub fn from_env() -> Self {
        Self::new(option_env!("MEMBER_SITE_API_BASE"), option_env!("MEMBER_SITE_LOG"))
    }

    pub fn new(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(Level::INFO);

        Self { api_base, log_level, featured: FeaturedLimits::default() }
    }

    /// Absolute endpoint path for a resource, e.g. `url("gallery")`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

/// Get the site config from context
pub fn use_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.featured, FeaturedLimits { gallery: 3, documents: 2, testimonials: 3 });
    }

    #[test]
    fn test_base_is_normalized() {
        let config = SiteConfig::new(Some("https://members.example.org/api/"), Some("debug"));
        assert_eq!(config.api_base, "https://members.example.org/api");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.url("/gallery"), "https://members.example.org/api/gallery");
        assert_eq!(config.url("gallery/7"), "https://members.example.org/api/gallery/7");
    }

    #[test]
    fn test_blank_or_bad_values_fall_back() {
        let config = SiteConfig::new(Some("  "), Some("loud"));
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, Level::INFO);
    }
}
