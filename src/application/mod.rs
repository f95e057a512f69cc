//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations: it resolves configured
//! defaults, enforces batch-level limits, and drives the scoring engine.

mod evaluate_scenario;

pub use evaluate_scenario::{
    EvaluateScenarioCommand, EvaluateScenarioError, EvaluateScenarioHandler, OptionInput,
};
