pub mod backend;
pub mod builder;
pub mod config;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod hooks;
pub mod lifecycle;
pub mod model;
pub mod session;

pub use builder::HarnessBuilder;
pub use error::FixtureError;
pub use lifecycle::{FixtureController, SuitePhase};
pub use session::FixtureSession;

pub mod prelude {
    pub use crate::{
        backend::Expectation,
        config::FixtureConfig,
        fixtures::request::FaultScenario,
        hooks::{HookEvent, TestTransaction},
        FixtureController, FixtureError, HarnessBuilder, SuitePhase,
    };
}
