//! Suite lifecycle state machine.
//!
//! The contract runner drives four hook points; this controller holds the
//! phase they are allowed in and the session they act on:
//!
//! ```text
//! Uninitialized --suite_start--> Ready --(test_start -> Ready)*--> suite_end --> Closed
//! ```
//!
//! Any store or mock-backend failure moves the controller to `Failed`, a
//! terminal phase in which every remaining hook is rejected so the runner
//! aborts the rest of the suite.

use std::fmt;

use crate::backend::Expectation;
use crate::config::FixtureConfig;
use crate::error::FixtureError;
use crate::fixtures::{data::FixtureDataset, mock, request};
use crate::hooks::TestTransaction;
use crate::session::FixtureSession;

/// Where the suite currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuitePhase {
    Uninitialized,
    Ready,
    Failed,
    Closed,
}

impl fmt::Display for SuitePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SuitePhase::Uninitialized => "uninitialized",
            SuitePhase::Ready => "ready",
            SuitePhase::Failed => "failed",
            SuitePhase::Closed => "closed",
        })
    }
}

/// Owns the fixture session and enforces the lifecycle ordering.
///
/// Built by [`crate::builder::HarnessBuilder`]; construction does no I/O.
/// The runner integration layer calls the four lifecycle methods (or
/// [`dispatch`](crate::hooks::HookEvent)) and treats each `Err` as a hook
/// failure for the associated test(s).
pub struct FixtureController {
    config: FixtureConfig,
    dataset: FixtureDataset,
    extra_expectations: Vec<Expectation>,
    phase: SuitePhase,
    session: Option<FixtureSession>,
}

impl FixtureController {
    pub fn new(config: FixtureConfig) -> Self {
        let dataset = FixtureDataset::new(&config.entity_namespace);

        Self {
            config,
            dataset,
            extra_expectations: Vec::new(),
            phase: SuitePhase::Uninitialized,
            session: None,
        }
    }

    pub(crate) fn with_expectations(mut self, expectations: Vec<Expectation>) -> Self {
        self.extra_expectations = expectations;
        self
    }

    pub fn phase(&self) -> SuitePhase {
        self.phase
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// The live session, if the suite has started and not yet ended.
    pub fn session(&self) -> Option<&FixtureSession> {
        self.session.as_ref()
    }

    /// Suite-start hook: connect to the store, then register the mock
    /// backend expectations.
    ///
    /// A connection failure surfaces before any expectation is registered
    /// and fails the whole suite; nothing is retried.
    pub async fn suite_start(&mut self) -> Result<(), FixtureError> {
        if self.phase != SuitePhase::Uninitialized {
            return Err(FixtureError::Configuration(self.phase));
        }

        match self.open_session().await {
            Ok(session) => {
                self.session = Some(session);
                self.phase = SuitePhase::Ready;
                Ok(())
            }
            Err(err) => {
                self.phase = SuitePhase::Failed;
                Err(err)
            }
        }
    }

    async fn open_session(&self) -> Result<FixtureSession, FixtureError> {
        let session = FixtureSession::connect(&self.config).await?;
        tracing::info!(
            "connected to fixture store at {}",
            self.config.store_endpoint
        );

        // Suite-specific expectations go first so a suite can shadow one of
        // the canned resources.
        session
            .backend()
            .register_all(&self.extra_expectations)
            .await?;
        let defaults = mock::default_expectations();
        session.backend().register_all(&defaults).await?;
        tracing::info!(
            "registered {} mock expectations at {}",
            defaults.len() + self.extra_expectations.len(),
            session.backend().base_url()
        );

        Ok(session)
    }

    /// Per-test hook: wipe the store and reseed the fixed dataset.
    ///
    /// Completes fully before returning, so the next test's request never
    /// observes a partially seeded store. Rejected with a configuration
    /// error when no store connection exists.
    pub async fn test_start(&mut self) -> Result<(), FixtureError> {
        if self.phase != SuitePhase::Ready {
            return Err(FixtureError::Configuration(self.phase));
        }
        let session = self
            .session
            .as_ref()
            .ok_or(FixtureError::Configuration(self.phase))?;

        match session.store().reset(&self.dataset).await {
            Ok(()) => {
                tracing::debug!("fixture store reset to baseline");
                Ok(())
            }
            Err(err) => {
                self.phase = SuitePhase::Failed;
                Err(err)
            }
        }
    }

    /// Per-test request hook: rewrite the transaction for recognized case
    /// names, leave everything else untouched.
    pub fn prepare_request(
        &self,
        case_name: &str,
        transaction: &mut TestTransaction,
    ) -> Result<(), FixtureError> {
        if matches!(self.phase, SuitePhase::Failed | SuitePhase::Closed) {
            return Err(FixtureError::Configuration(self.phase));
        }

        request::prepare(case_name, &self.config.mock_endpoint, transaction);
        Ok(())
    }

    /// Suite-end hook: drop the store contents and release the connection.
    ///
    /// The controller closes either way; a teardown error is logged and
    /// surfaced but the runner's recorded results stand.
    pub async fn suite_end(&mut self) -> Result<(), FixtureError> {
        let session = self.session.take();
        self.phase = SuitePhase::Closed;

        let Some(session) = session else {
            return Ok(());
        };

        match session.teardown().await {
            Ok(()) => {
                tracing::info!("fixture store dropped and connection released");
                Ok(())
            }
            Err(err) => {
                tracing::error!("fixture store teardown failed: {err}");
                Err(err)
            }
        }
    }
}
