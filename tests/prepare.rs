//! Tests for request rewriting of named contract cases.

use serde_json::Value;

use orders_test_utils::prelude::*;

fn harness() -> FixtureController {
    HarnessBuilder::new()
        .with_mock_endpoint("http://users-orders-mock:80")
        .build()
}

fn parsed_body(transaction: &TestTransaction) -> Value {
    let body = transaction.body.as_deref().expect("body should be set");
    serde_json::from_str(body).expect("body should be valid JSON")
}

#[test]
fn test_create_order_case_injects_canned_payload() {
    let controller = harness();
    let mut transaction = TestTransaction::new("/orders > POST");

    controller
        .prepare_request("/orders > POST", &mut transaction)
        .expect("prepare should succeed");

    assert_eq!(
        transaction.headers.get("Content-Type"),
        Some(&"application/json".to_string())
    );

    let body = parsed_body(&transaction);
    assert_eq!(
        body["customer"],
        "http://users-orders-mock:80/customers/57a98d98e4b00679b4a830af"
    );
    assert_eq!(
        body["address"],
        "http://users-orders-mock:80/addresses/57a98d98e4b00679b4a830ad"
    );
    assert_eq!(
        body["card"],
        "http://users-orders-mock:80/cards/57a98d98e4b00679b4a830ae"
    );
    assert_eq!(
        body["items"],
        "http://users-orders-mock:80/carts/579f21ae98684924944651bf/items"
    );
    assert!(
        body.get("simulate").is_none(),
        "the plain creation case carries no fault field"
    );
}

#[test]
fn test_list_orders_case_mimics_known_client() {
    let controller = harness();
    let mut transaction = TestTransaction::new("/orders > GET");

    controller
        .prepare_request("/orders > GET", &mut transaction)
        .expect("prepare should succeed");

    assert_eq!(
        transaction.headers.get("User-Agent"),
        Some(&"curl/7.43.0".to_string())
    );
    assert_eq!(transaction.headers.get("Accept"), Some(&"*/*".to_string()));
    assert!(transaction.body.is_none(), "the listing case keeps its body");
}

#[test]
fn test_latency_fault_case_sets_simulate_and_base_fields() {
    let controller = harness();
    let mut transaction = TestTransaction::new("/orders > POST latency");

    controller
        .prepare_request("/orders > POST latency", &mut transaction)
        .expect("prepare should succeed");

    let body = parsed_body(&transaction);
    assert_eq!(body["simulate"], "latency");
    for field in ["customer", "address", "card", "items"] {
        let value = body[field].as_str().unwrap_or_default();
        assert!(!value.is_empty(), "field `{field}` must be non-empty");
    }
}

#[test]
fn test_every_fault_scenario_is_injected_by_name() {
    let controller = harness();

    for scenario in FaultScenario::ALL {
        let case_name = format!("/orders > POST {scenario}");
        let mut transaction = TestTransaction::new(&case_name);

        controller
            .prepare_request(&case_name, &mut transaction)
            .expect("prepare should succeed");

        let body = parsed_body(&transaction);
        assert_eq!(
            body["simulate"],
            scenario.as_str(),
            "case `{case_name}` must name its fault"
        );
    }
}

#[test]
fn test_unrecognized_cases_are_left_untouched() {
    let controller = harness();

    for case_name in [
        "/orders > DELETE",
        "/orders > POST banana",
        "/customers > GET",
        "",
    ] {
        let mut transaction = TestTransaction::new(case_name);
        transaction.set_header("X-Existing", "kept");
        transaction.body = Some("{\"untouched\":true}".to_string());
        let before = transaction.clone();

        controller
            .prepare_request(case_name, &mut transaction)
            .expect("prepare should succeed");

        assert_eq!(
            transaction, before,
            "case `{case_name}` must pass through unmodified"
        );
    }
}
