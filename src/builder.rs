//! Declarative harness builder.
//!
//! This module provides the `HarnessBuilder` API for configuring a fixture
//! controller before the runner takes over. Overrides can be chained in any
//! order; `build()` resolves environment configuration, applies them, and
//! returns a controller that has done no I/O yet; the store connection and
//! expectation registration happen in the suite-start hook.

use std::time::Duration;

use crate::{backend::Expectation, config::FixtureConfig, lifecycle::FixtureController};

/// Builder for a [`FixtureController`].
///
/// Defaults come from the environment (see [`FixtureConfig::from_env`]);
/// every method overrides one knob and returns the builder for chaining.
///
/// ```no_run
/// use orders_test_utils::HarnessBuilder;
///
/// let controller = HarnessBuilder::new()
///     .with_store_endpoint("mongodb://localhost:27017/data")
///     .with_mock_endpoint("http://localhost:1080")
///     .build();
/// ```
pub struct HarnessBuilder {
    store_endpoint: Option<String>,
    mock_endpoint: Option<String>,
    entity_namespace: Option<String>,
    server_selection_timeout: Option<Duration>,
    expectations: Vec<Expectation>,
}

impl HarnessBuilder {
    /// Create a new builder with no overrides configured.
    pub fn new() -> Self {
        Self {
            store_endpoint: None,
            mock_endpoint: None,
            entity_namespace: None,
            server_selection_timeout: None,
            expectations: Vec::new(),
        }
    }

    /// Override the fixture store connection string.
    ///
    /// # Arguments
    /// - `endpoint` - MongoDB connection string, e.g. `mongodb://host:port/db`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_store_endpoint(mut self, endpoint: &str) -> Self {
        self.store_endpoint = Some(endpoint.to_string());
        self
    }

    /// Override the mock backend base URL.
    ///
    /// Used both for the administrative API and for the dependency URLs in
    /// rewritten order payloads.
    ///
    /// # Arguments
    /// - `endpoint` - Base URL, e.g. `http://localhost:1080`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint(mut self, endpoint: &str) -> Self {
        self.mock_endpoint = Some(endpoint.to_string());
        self
    }

    /// Override the `_class` namespace stamped into seeded documents.
    ///
    /// # Arguments
    /// - `namespace` - Java-package prefix, e.g. `works.weave.socks`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_entity_namespace(mut self, namespace: &str) -> Self {
        self.entity_namespace = Some(namespace.to_string());
        self
    }

    /// Cap how long the store driver spends on server selection.
    ///
    /// Suites that want an unreachable store to fail fast at suite start set
    /// this well below the driver default.
    ///
    /// # Arguments
    /// - `timeout` - Maximum server selection duration
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = Some(timeout);
        self
    }

    /// Queue an extra mock expectation on top of the canned set.
    ///
    /// Registered before the canned set at suite start, so a suite can
    /// shadow one of the default resources.
    ///
    /// # Arguments
    /// - `expectation` - Expectation to register at suite start
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Resolve configuration and build an uninitialized controller.
    pub fn build(self) -> FixtureController {
        let mut config = FixtureConfig::from_env();

        if let Some(endpoint) = self.store_endpoint {
            config.store_endpoint = endpoint;
        }
        if let Some(endpoint) = self.mock_endpoint {
            config.mock_endpoint = endpoint;
        }
        if let Some(namespace) = self.entity_namespace {
            config.entity_namespace = namespace;
        }
        if self.server_selection_timeout.is_some() {
            config.server_selection_timeout = self.server_selection_timeout;
        }

        FixtureController::new(config).with_expectations(self.expectations)
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::backend::Expectation;

    use super::*;

    #[test]
    fn test_builder_overrides_config() {
        let controller = HarnessBuilder::new()
            .with_store_endpoint("mongodb://store:27017/fixtures")
            .with_mock_endpoint("http://mock:1080")
            .with_entity_namespace("com.example.shop")
            .with_server_selection_timeout(Duration::from_millis(250))
            .build();

        let config = controller.config();
        assert_eq!(config.store_endpoint, "mongodb://store:27017/fixtures");
        assert_eq!(config.mock_endpoint, "http://mock:1080");
        assert_eq!(config.entity_namespace, "com.example.shop");
        assert_eq!(
            config.server_selection_timeout,
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_builder_defaults_come_from_env_resolution() {
        let controller = HarnessBuilder::new().build();

        let config = controller.config();
        assert!(!config.store_endpoint.is_empty());
        assert!(!config.mock_endpoint.is_empty());
        assert!(config.server_selection_timeout.is_none());
    }

    #[test]
    fn test_builder_chains_expectations() {
        let controller = HarnessBuilder::new()
            .with_expectation(Expectation::json("GET", "/health", json!({"ok": true})))
            .with_expectation(Expectation::json("GET", "/version", json!({"v": 1})))
            .build();

        // Queued expectations surface once suite_start registers them; the
        // builder only carries them across.
        assert_eq!(controller.phase(), crate::lifecycle::SuitePhase::Uninitialized);
    }
}
