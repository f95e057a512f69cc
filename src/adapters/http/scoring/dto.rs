//! HTTP DTOs for scoring endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{EvaluateScenarioCommand, OptionInput};
use crate::domain::scoring::{Evaluation, EvaluationError, ParseMode, RankedOption};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One option definition: a name plus free-form outcome and probability text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionPayload {
    pub name: String,
    pub outcomes: String,
    pub probabilities: String,
}

/// Request to evaluate a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub options: Vec<OptionPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_aversion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl From<EvaluateRequest> for EvaluateScenarioCommand {
    fn from(req: EvaluateRequest) -> Self {
        Self {
            options: req
                .options
                .into_iter()
                .map(|o| OptionInput {
                    name: o.name,
                    outcomes: o.outcomes,
                    probabilities: o.probabilities,
                })
                .collect(),
            risk_aversion: req.risk_aversion,
            parse_mode: req.parse_mode,
            unit: req.unit,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One ranked option in an evaluation response.
#[derive(Debug, Clone, Serialize)]
pub struct RankedOptionResponse {
    pub rank: usize,
    pub name: String,
    pub expected_value: f64,
    pub variance: f64,
    pub score: f64,
    pub tied: bool,
}

impl From<RankedOption> for RankedOptionResponse {
    fn from(entry: RankedOption) -> Self {
        Self {
            rank: entry.rank,
            name: entry.name,
            expected_value: entry.expected_value,
            variance: entry.variance,
            score: entry.score,
            tied: entry.tied,
        }
    }
}

/// Complete evaluation response, sorted by score descending.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    pub risk_aversion: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub top_tied: bool,
    pub results: Vec<RankedOptionResponse>,
}

impl EvaluateResponse {
    pub fn from_evaluation(evaluation: Evaluation, unit: Option<String>) -> Self {
        Self {
            risk_aversion: evaluation.risk_aversion,
            unit,
            top_tied: evaluation.ranking.top_tied,
            results: evaluation
                .ranking
                .entries
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            option: None,
        }
    }

    /// Maps a per-option validation failure to its stable code, naming the
    /// offending option.
    pub fn validation(error: &EvaluationError) -> Self {
        Self {
            code: error.source.code().to_string(),
            message: error.to_string(),
            option: Some(error.option.clone()),
        }
    }
}
