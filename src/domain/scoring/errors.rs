//! Error types for the scoring engine.

use std::fmt;
use thiserror::Error;

/// Which raw input list a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Outcomes,
    Probabilities,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputField::Outcomes => "outcomes",
            InputField::Probabilities => "probabilities",
        };
        write!(f, "{}", s)
    }
}

/// Validation failures for a single option's input.
///
/// All of these are detected before any statistic is computed. The offending
/// option's name is attached by [`EvaluationError`] at the point of failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("'{segment}' in the {field} list is not a number")]
    ParseError { field: InputField, segment: String },

    #[error("outcomes and probabilities must have the same length ({outcomes} outcomes, {probabilities} probabilities)")]
    LengthMismatch { outcomes: usize, probabilities: usize },

    #[error("probability list is empty")]
    EmptyDistribution,

    #[error("probability at position {index} is negative ({value})")]
    NegativeProbability { index: usize, value: f64 },

    #[error("probabilities must sum to 1, got {sum:.6}")]
    NormalizationError { sum: f64 },
}

impl ScoringError {
    /// Creates a parse error for one unparseable segment.
    pub fn parse_error(field: InputField, segment: impl Into<String>) -> Self {
        ScoringError::ParseError {
            field,
            segment: segment.into(),
        }
    }

    /// Creates a length mismatch error.
    pub fn length_mismatch(outcomes: usize, probabilities: usize) -> Self {
        ScoringError::LengthMismatch {
            outcomes,
            probabilities,
        }
    }

    /// Creates a negative probability error for the first offending entry.
    pub fn negative_probability(index: usize, value: f64) -> Self {
        ScoringError::NegativeProbability { index, value }
    }

    /// Creates a normalization error reporting the actual sum.
    pub fn normalization_error(sum: f64) -> Self {
        ScoringError::NormalizationError { sum }
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ScoringError::ParseError { .. } => "PARSE_ERROR",
            ScoringError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            ScoringError::EmptyDistribution => "EMPTY_DISTRIBUTION",
            ScoringError::NegativeProbability { .. } => "NEGATIVE_PROBABILITY",
            ScoringError::NormalizationError { .. } => "NORMALIZATION_ERROR",
        }
    }
}

/// A [`ScoringError`] tied to the option that triggered it.
///
/// The batch evaluation aborts on the first offending option, so callers can
/// always tell the user exactly which option to fix.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("option '{option}': {source}")]
pub struct EvaluationError {
    pub option: String,
    #[source]
    pub source: ScoringError,
}

impl EvaluationError {
    /// Attaches an option name to a scoring error.
    pub fn for_option(option: impl Into<String>, source: ScoringError) -> Self {
        Self {
            option: option.into(),
            source,
        }
    }
}
