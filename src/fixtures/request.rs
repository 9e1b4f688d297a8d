//! Rewrite rules for named outgoing test requests.
//!
//! The contract suite sends requests straight from the API description; a
//! handful of cases need a real payload or specific headers before they are
//! valid against the service under test. Cases are matched by their full
//! transaction name; anything unrecognized passes through untouched.

use serde::{Deserialize, Serialize};

use crate::constant::{MOCK_ADDRESS_ID, MOCK_CARD_ID, MOCK_CART_ID, MOCK_CUSTOMER_ID};
use crate::hooks::TestTransaction;

/// Transaction name of the plain order-creation case.
pub static CREATE_ORDER_CASE: &str = "/orders > POST";

/// Transaction name of the order-listing case.
pub static LIST_ORDERS_CASE: &str = "/orders > GET";

/// Fault the service under test is asked to simulate while handling an
/// order-creation request carrying a `simulate` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultScenario {
    Latency,
    Cpu,
    Leak,
    Thread,
    Deadlock,
    Error,
}

impl FaultScenario {
    pub const ALL: [FaultScenario; 6] = [
        FaultScenario::Latency,
        FaultScenario::Cpu,
        FaultScenario::Leak,
        FaultScenario::Thread,
        FaultScenario::Deadlock,
        FaultScenario::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaultScenario::Latency => "latency",
            FaultScenario::Cpu => "cpu",
            FaultScenario::Leak => "leak",
            FaultScenario::Thread => "thread",
            FaultScenario::Deadlock => "deadlock",
            FaultScenario::Error => "error",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == name)
    }
}

impl std::fmt::Display for FaultScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body sent for order-creation cases: dependency URLs into the mock
/// backend, plus an optional fault to simulate server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer: String,
    pub address: String,
    pub card: String,
    pub items: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulate: Option<FaultScenario>,
}

impl OrderPayload {
    /// Payload referencing the canned resources under `mock_endpoint`.
    pub fn against(mock_endpoint: &str) -> Self {
        let base = mock_endpoint.trim_end_matches('/');

        Self {
            customer: format!("{base}/customers/{MOCK_CUSTOMER_ID}"),
            address: format!("{base}/addresses/{MOCK_ADDRESS_ID}"),
            card: format!("{base}/cards/{MOCK_CARD_ID}"),
            items: format!("{base}/carts/{MOCK_CART_ID}/items"),
            simulate: None,
        }
    }

    /// Same payload with a `simulate` field naming the fault to trigger.
    pub fn simulating(mock_endpoint: &str, scenario: FaultScenario) -> Self {
        Self {
            simulate: Some(scenario),
            ..Self::against(mock_endpoint)
        }
    }
}

/// Apply the rewrite rule for `case_name` to the transaction, if one exists.
pub fn prepare(case_name: &str, mock_endpoint: &str, transaction: &mut TestTransaction) {
    if case_name == CREATE_ORDER_CASE {
        transaction.set_header("Content-Type", "application/json");
        transaction.body =
            Some(serde_json::to_string(&OrderPayload::against(mock_endpoint)).unwrap());
        return;
    }

    if case_name == LIST_ORDERS_CASE {
        transaction.set_header("User-Agent", "curl/7.43.0");
        transaction.set_header("Accept", "*/*");
        return;
    }

    // "/orders > POST latency" and friends; an unknown suffix is not a
    // fault case and falls through unmodified.
    let fault_case = case_name
        .strip_prefix("/orders > POST ")
        .and_then(FaultScenario::from_name);
    if let Some(scenario) = fault_case {
        transaction.set_header("Content-Type", "application/json");
        transaction.body =
            Some(serde_json::to_string(&OrderPayload::simulating(mock_endpoint, scenario)).unwrap());
    }
}
