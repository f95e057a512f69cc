//! Scoring engine façade - batch evaluation over validated options.

use serde::Serialize;

use super::option::DecisionOption;
use super::ranking::{rank_options, Ranking, ScoredOption};
use super::statistics::{compute_statistics, risk_adjusted_score};

/// One evaluation run's inputs: a batch of validated options and a shared
/// risk-aversion coefficient. Request-local and immutable; the engine carries
/// no state between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    pub options: Vec<DecisionOption>,
    pub risk_aversion: f64,
}

/// The complete result of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub risk_aversion: f64,
    pub ranking: Ranking,
}

/// Batch scoring over validated options.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores every option and ranks the batch.
    ///
    /// All validation happens during option construction, so this cannot
    /// fail. Statistics are computed per option in input order; the shared λ
    /// applies to the whole batch.
    pub fn evaluate(request: EvaluationRequest) -> Evaluation {
        let risk_aversion = request.risk_aversion;

        let scored = request
            .options
            .into_iter()
            .map(|option| {
                let statistics =
                    compute_statistics(option.outcomes(), option.probabilities().as_slice());
                let score = risk_adjusted_score(&statistics, risk_aversion);
                ScoredOption {
                    name: option.into_name(),
                    expected_value: statistics.expected_value,
                    variance: statistics.variance,
                    score,
                }
            })
            .collect();

        Evaluation {
            risk_aversion,
            ranking: rank_options(scored),
        }
    }
}
