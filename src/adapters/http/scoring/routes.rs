//! HTTP routes for scoring endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::EvaluateScenarioHandler;

use super::handlers::{evaluate_scenario, list_examples};

/// Creates the scoring router with all endpoints.
pub fn scoring_routes(handler: EvaluateScenarioHandler) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_scenario))
        .route("/examples", get(list_examples))
        .with_state(handler)
}
