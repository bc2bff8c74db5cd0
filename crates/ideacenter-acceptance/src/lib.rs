//! Ordered acceptance scenario for the IdeaCenter API
//!
//! The scenario authenticates once, then walks a fixed list of [`Step`]s
//! (create, list, edit, delete, and the negative cases) against one remote
//! service. The identifier of the created idea travels between steps in a
//! [`ScenarioContext`] owned by the [`ScenarioRunner`].

pub mod config;
pub mod context;
pub mod error;
pub mod expect;
pub mod logging;
pub mod runner;
pub mod steps;

pub use config::AcceptanceConfig;
pub use context::ScenarioContext;
pub use error::{Result, ScenarioError};
pub use expect::{BodyExpectation, Expectation};
pub use runner::{ScenarioReport, ScenarioRunner, StepOutcome, run_scenario};
pub use steps::{Step, StepAction, standard_steps};
