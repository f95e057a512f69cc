//! HTTP adapter for the scoring engine.

mod dto;
mod examples;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, EvaluateRequest, EvaluateResponse, OptionPayload, RankedOptionResponse,
};
pub use examples::{example_scenarios, ExampleScenario};
pub use routes::scoring_routes;
