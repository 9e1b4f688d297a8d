//! Runner hook adapter.
//!
//! Contract runners expose named lifecycle hooks rather than structured
//! control flow. [`HookEvent`] names the four hook points this harness
//! serves, and [`FixtureController::dispatch`] maps an event onto the
//! matching lifecycle method, so bridging a runner's hook registry is one
//! call per hook. The completion signal each hook contract expects is the
//! returned `Result`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::FixtureError, lifecycle::FixtureController};

/// The outgoing test request as the runner hands it to the prepare hook.
///
/// Header and body mutations happen in place; the runner sends whatever is
/// left here once the hook completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestTransaction {
    /// Transaction name as the runner reports it, e.g. `"/orders > POST"`.
    pub name: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl TestTransaction {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }
}

/// One of the four runner hook points.
pub enum HookEvent<'a> {
    /// Before the run: connect the store, register mock expectations.
    SuiteStart,
    /// Before each test: wipe and reseed the store.
    TestStart,
    /// Before a request is sent: rewrite it if its case name is recognized.
    PrepareRequest {
        case_name: &'a str,
        transaction: &'a mut TestTransaction,
    },
    /// After the run: drop the store and release the connection.
    SuiteEnd,
}

impl FixtureController {
    /// Route a hook event to the matching lifecycle method.
    pub async fn dispatch(&mut self, event: HookEvent<'_>) -> Result<(), FixtureError> {
        match event {
            HookEvent::SuiteStart => self.suite_start().await,
            HookEvent::TestStart => self.test_start().await,
            HookEvent::PrepareRequest {
                case_name,
                transaction,
            } => self.prepare_request(case_name, transaction),
            HookEvent::SuiteEnd => self.suite_end().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_header_mutation() {
        let mut transaction = TestTransaction::new("/orders > GET");
        transaction.set_header("Accept", "*/*");
        transaction.set_header("Accept", "application/json");

        assert_eq!(
            transaction.headers.get("Accept"),
            Some(&"application/json".to_string())
        );
        assert!(transaction.body.is_none());
    }
}
