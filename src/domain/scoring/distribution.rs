//! Probability distribution value object.

use serde::Serialize;

use super::errors::ScoringError;

/// Absolute tolerance on the probability sum.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// A validated discrete probability distribution.
///
/// Invariants: at least one entry, no negative entries, and the entries sum
/// to 1 within [`PROBABILITY_SUM_TOLERANCE`]. Construction is the only way to
/// obtain a value, so holders can rely on the invariants without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProbabilityDistribution(Vec<f64>);

impl ProbabilityDistribution {
    /// Validates a list of probabilities.
    ///
    /// Zero entries are permitted; negative entries are rejected rather than
    /// clamped. The normalization check reports the actual computed sum.
    pub fn try_new(probabilities: Vec<f64>) -> Result<Self, ScoringError> {
        if probabilities.is_empty() {
            return Err(ScoringError::EmptyDistribution);
        }

        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, &p)| p < 0.0)
        {
            return Err(ScoringError::negative_probability(index, value));
        }

        let sum: f64 = probabilities.iter().sum();
        // Negated bound so a NaN sum fails normalization instead of passing.
        if !((sum - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE) {
            return Err(ScoringError::normalization_error(sum));
        }

        Ok(Self(probabilities))
    }

    /// The probabilities in input order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated distribution.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
