use thiserror::Error;

use crate::lifecycle::SuitePhase;

#[derive(Error, Debug)]
pub enum FixtureError {
    /// Fixture store unreachable at suite start. Fatal for the whole suite.
    #[error("failed to connect to fixture store at {endpoint}")]
    Connection {
        endpoint: String,
        #[source]
        source: mongodb::error::Error,
    },
    /// Lifecycle call made in a phase that does not allow it, such as a
    /// fixture reset with no store connection.
    #[error("fixture store is not available while the suite is {0}")]
    Configuration(SuitePhase),
    /// Whole-store wipe failed at the start of a reset.
    #[error("failed to wipe fixture store before reseeding")]
    Wipe(#[source] mongodb::error::Error),
    /// Insert failed during reseeding. The store is left partially seeded;
    /// the next reset starts from a wipe regardless.
    #[error("failed to seed fixture collection `{collection}`")]
    Seed {
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
    /// Mock backend rejected or never received an expectation registration.
    #[error("failed to register mock expectation {method} {path}")]
    Expectation {
        method: String,
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// Store teardown failed after the run. Test results are already final
    /// by this point, so callers log and surface but do not retry.
    #[error("failed to tear down fixture store")]
    Teardown(#[source] mongodb::error::Error),
}
