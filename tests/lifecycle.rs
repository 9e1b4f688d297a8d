//! Lifecycle ordering and failure-path tests.
//!
//! None of these need a live store: the unreachable-store case points the
//! harness at a closed port with a short server-selection timeout, and the
//! ordering cases never get past the phase checks.

use std::time::Duration;

use mockito::Server;

use orders_test_utils::prelude::*;

#[tokio::test]
async fn test_unreachable_store_fails_suite_start_before_registration() {
    let mut server = Server::new_async().await;
    let admin = server
        .mock("PUT", "/mockserver/expectation")
        .expect(0)
        .create_async()
        .await;

    let mut controller = HarnessBuilder::new()
        .with_store_endpoint("mongodb://127.0.0.1:9/data")
        .with_mock_endpoint(&server.url())
        .with_server_selection_timeout(Duration::from_millis(300))
        .build();

    let result = controller.suite_start().await;
    assert!(
        matches!(result, Err(FixtureError::Connection { .. })),
        "suite start against a closed port should report a connection error"
    );
    assert_eq!(controller.phase(), SuitePhase::Failed);

    // No expectation may reach the mock backend once the connection failed.
    admin.assert_async().await;

    let reset = controller.test_start().await;
    assert!(matches!(
        reset,
        Err(FixtureError::Configuration(SuitePhase::Failed))
    ));
}

#[tokio::test]
async fn test_reset_without_connection_is_a_configuration_error() {
    let mut controller = HarnessBuilder::new().build();

    let result = controller.test_start().await;
    assert!(matches!(
        result,
        Err(FixtureError::Configuration(SuitePhase::Uninitialized))
    ));
    assert_eq!(
        controller.phase(),
        SuitePhase::Uninitialized,
        "a rejected reset must not move the phase"
    );
}

#[tokio::test]
async fn test_suite_end_without_session_closes_cleanly() {
    let mut controller = HarnessBuilder::new().build();

    controller
        .suite_end()
        .await
        .expect("ending a suite that never started should be a no-op");
    assert_eq!(controller.phase(), SuitePhase::Closed);

    let mut transaction = TestTransaction::new("/orders > GET");
    let result = controller.prepare_request("/orders > GET", &mut transaction);
    assert!(matches!(
        result,
        Err(FixtureError::Configuration(SuitePhase::Closed))
    ));
}

#[tokio::test]
async fn test_dispatch_routes_hook_events() {
    let mut controller = HarnessBuilder::new().build();

    let result = controller.dispatch(HookEvent::TestStart).await;
    assert!(
        matches!(result, Err(FixtureError::Configuration(_))),
        "dispatch must route to the same phase checks as the direct calls"
    );

    let mut transaction = TestTransaction::new("/orders > GET");
    controller
        .dispatch(HookEvent::PrepareRequest {
            case_name: "/orders > GET",
            transaction: &mut transaction,
        })
        .await
        .expect("prepare hook should succeed before suite start");
    assert_eq!(
        transaction.headers.get("User-Agent"),
        Some(&"curl/7.43.0".to_string())
    );
}
