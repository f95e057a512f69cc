//! HTTP handlers for scoring endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{EvaluateScenarioError, EvaluateScenarioHandler};

use super::dto::{ErrorResponse, EvaluateRequest, EvaluateResponse};
use super::examples::example_scenarios;

/// POST /api/evaluate - Score and rank a scenario's options
pub async fn evaluate_scenario(
    State(handler): State<EvaluateScenarioHandler>,
    Json(req): Json<EvaluateRequest>,
) -> Response {
    let unit = req.unit.clone();

    match handler.handle(req.into()) {
        Ok(evaluation) => {
            let response = EvaluateResponse::from_evaluation(evaluation, unit);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

/// GET /api/examples - List the bundled example scenarios
pub async fn list_examples() -> Response {
    (StatusCode::OK, Json(example_scenarios())).into_response()
}

/// Maps scenario evaluation failures to HTTP responses.
///
/// Batch-shape violations are 400s; per-option validation failures are 422s
/// carrying the stable error code and the offending option's name.
fn handle_scenario_error(error: EvaluateScenarioError) -> Response {
    match &error {
        EvaluateScenarioError::NoOptions | EvaluateScenarioError::TooManyOptions { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.to_string())),
        )
            .into_response(),
        EvaluateScenarioError::Evaluation(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(e)),
        )
            .into_response(),
    }
}
