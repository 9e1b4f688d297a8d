//! Mock backend administrative client.
//!
//! The dependency mock is a separate MockServer-style process; this module
//! registers request/response expectations on it over its administrative
//! HTTP API so the service under test sees canned dependency data during the
//! run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{constant::EXPECTATION_PATH, error::FixtureError};

/// Request matcher half of an expectation: method and exact path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMatcher {
    pub method: String,
    pub path: String,
}

/// Response half of an expectation: status, JSON body, and headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStub {
    pub status_code: u16,
    pub body: Value,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Vec<String>>,
}

/// One request/response expectation in the administrative wire shape:
/// `{"httpRequest": {...}, "httpResponse": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expectation {
    pub http_request: RequestMatcher,
    pub http_response: ResponseStub,
}

impl Expectation {
    /// Expectation answering `method path` with a 200 JSON response.
    pub fn json(method: &str, path: &str, body: Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            "Content-Type".to_string(),
            vec!["application/json".to_string()],
        );

        Self {
            http_request: RequestMatcher {
                method: method.to_string(),
                path: path.to_string(),
            },
            http_response: ResponseStub {
                status_code: 200,
                body,
                headers,
            },
        }
    }
}

/// HTTP client for the mock backend's administrative API.
#[derive(Debug, Clone)]
pub struct MockBackend {
    base_url: String,
    client: reqwest::Client,
}

impl MockBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register one expectation via `PUT {base_url}/mockserver/expectation`.
    ///
    /// A non-2xx administrative response counts as a registration failure.
    pub async fn register(&self, expectation: &Expectation) -> Result<(), FixtureError> {
        let url = format!("{}{}", self.base_url, EXPECTATION_PATH);

        let response = self
            .client
            .put(&url)
            .json(expectation)
            .send()
            .await
            .map_err(|source| self.registration_error(expectation, source))?;

        response
            .error_for_status()
            .map_err(|source| self.registration_error(expectation, source))?;

        Ok(())
    }

    /// Register expectations in order, stopping at the first failure.
    pub async fn register_all(&self, expectations: &[Expectation]) -> Result<(), FixtureError> {
        for expectation in expectations {
            self.register(expectation).await?;
        }

        Ok(())
    }

    fn registration_error(&self, expectation: &Expectation, source: reqwest::Error) -> FixtureError {
        FixtureError::Expectation {
            method: expectation.http_request.method.clone(),
            path: expectation.http_request.path.clone(),
            source,
        }
    }
}
