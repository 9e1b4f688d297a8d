use std::time::Duration;

use crate::constant::{
    DEFAULT_ENTITY_NAMESPACE, DEFAULT_MOCK_ENDPOINT, DEFAULT_STORE_ENDPOINT, MOCK_ENDPOINT_VAR,
    STORE_ENDPOINT_VAR,
};

/// Resolved harness configuration.
///
/// Built from the environment by [`FixtureConfig::from_env`], with builder
/// overrides applied on top (see [`crate::builder::HarnessBuilder`]). Every
/// field has a working default, so resolution never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureConfig {
    /// Fixture store connection string.
    pub store_endpoint: String,
    /// Mock backend base URL, used both for its administrative API and for
    /// the dependency URLs injected into rewritten order payloads.
    pub mock_endpoint: String,
    /// Java-package prefix stamped into the `_class` field of seeded
    /// documents, selecting which service namespace the dataset imitates.
    pub entity_namespace: String,
    /// Optional cap on store server selection, letting suites fail fast
    /// when the store is unreachable instead of waiting out the driver
    /// default.
    pub server_selection_timeout: Option<Duration>,
}

impl FixtureConfig {
    /// Resolve configuration from the environment, loading `.env` first and
    /// falling back to the compose-layout defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            store_endpoint: std::env::var(STORE_ENDPOINT_VAR)
                .unwrap_or_else(|_| DEFAULT_STORE_ENDPOINT.to_string()),
            mock_endpoint: std::env::var(MOCK_ENDPOINT_VAR)
                .unwrap_or_else(|_| DEFAULT_MOCK_ENDPOINT.to_string()),
            entity_namespace: DEFAULT_ENTITY_NAMESPACE.to_string(),
            server_selection_timeout: None,
        }
    }
}
