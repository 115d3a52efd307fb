//! Storefront session configuration.

use std::time::Duration;

/// Configuration for a storefront session.
///
/// There is no CLI or environment surface; the embedding application
/// constructs this at session start.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// URL of the catalog document.
    pub catalog_url: String,
    /// Quiet period before a free-text search edit is applied.
    pub search_debounce: Duration,
    /// Total timeout for the catalog fetch.
    pub request_timeout: Duration,
}

impl StorefrontConfig {
    /// Create a configuration for the given catalog URL.
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            search_debounce: Duration::from_millis(200),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Set the search debounce quiet period.
    pub fn with_search_debounce(mut self, quiet: Duration) -> Self {
        self.search_debounce = quiet;
        self
    }

    /// Set the catalog fetch timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StorefrontConfig::new("https://shop.example/catalog.json");

        assert_eq!(config.catalog_url, "https://shop.example/catalog.json");
        assert_eq!(config.search_debounce, Duration::from_millis(200));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StorefrontConfig::new("/catalog.json")
            .with_search_debounce(Duration::from_millis(50))
            .with_request_timeout(Duration::from_secs(2));

        assert_eq!(config.search_debounce, Duration::from_millis(50));
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }
}
