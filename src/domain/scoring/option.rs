//! Decision option value object.

use serde::Serialize;

use super::distribution::ProbabilityDistribution;
use super::errors::{EvaluationError, InputField, ScoringError};
use super::parse::{parse_number_list, ParseMode};

/// A named pairing of an outcome set and a probability distribution.
///
/// Constructed from raw user input at evaluation time and discarded after
/// results are produced. Immutable once validated: the length invariant
/// (`outcomes.len() == probabilities.len()`) and the distribution invariants
/// are established here, before any statistic is computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionOption {
    name: String,
    outcomes: Vec<f64>,
    probabilities: ProbabilityDistribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl DecisionOption {
    /// Builds a validated option from already-parsed numeric lists.
    ///
    /// The length check runs first, then distribution validation; every
    /// failure carries the option's name so batch callers can point the user
    /// at the offending option.
    pub fn new(
        name: impl Into<String>,
        outcomes: Vec<f64>,
        probabilities: Vec<f64>,
    ) -> Result<Self, EvaluationError> {
        let name = name.into();

        if outcomes.len() != probabilities.len() {
            return Err(EvaluationError::for_option(
                name,
                ScoringError::length_mismatch(outcomes.len(), probabilities.len()),
            ));
        }

        let probabilities = match ProbabilityDistribution::try_new(probabilities) {
            Ok(distribution) => distribution,
            Err(source) => return Err(EvaluationError::for_option(name, source)),
        };

        Ok(Self {
            name,
            outcomes,
            probabilities,
            unit: None,
        })
    }

    /// Builds a validated option from free-form outcome and probability text.
    pub fn from_text(
        name: impl Into<String>,
        outcomes_text: &str,
        probabilities_text: &str,
        mode: ParseMode,
    ) -> Result<Self, EvaluationError> {
        let name = name.into();

        let outcomes = parse_number_list(outcomes_text, mode, InputField::Outcomes)
            .map_err(|source| EvaluationError::for_option(name.clone(), source))?;
        let probabilities = parse_number_list(probabilities_text, mode, InputField::Probabilities)
            .map_err(|source| EvaluationError::for_option(name.clone(), source))?;

        Self::new(name, outcomes, probabilities)
    }

    /// Attaches a display unit. Purely cosmetic; carries no semantics into
    /// any arithmetic.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outcomes(&self) -> &[f64] {
        &self.outcomes
    }

    pub fn probabilities(&self) -> &ProbabilityDistribution {
        &self.probabilities
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Consumes the option, returning its name.
    pub fn into_name(self) -> String {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_option_from_valid_lists() {
        let option = DecisionOption::new("Savings", vec![100.0, 100.0], vec![1.0, 0.0]).unwrap();
        assert_eq!(option.name(), "Savings");
        assert_eq!(option.outcomes(), &[100.0, 100.0]);
        assert_eq!(option.probabilities().as_slice(), &[1.0, 0.0]);
        assert!(option.unit().is_none());
    }

    #[test]
    fn rejects_mismatched_lengths_before_distribution_checks() {
        // Three outcomes, two probabilities: must fail as a length mismatch
        // even though the probabilities alone would not normalize either.
        let err = DecisionOption::new("Plan A", vec![1.0, 2.0, 3.0], vec![0.5, 0.25]).unwrap_err();
        assert_eq!(err.option, "Plan A");
        assert_eq!(err.source, ScoringError::length_mismatch(3, 2));
    }

    #[test]
    fn rejects_invalid_distribution_with_option_name() {
        let err = DecisionOption::new("Plan B", vec![1.0, 2.0], vec![0.5, 0.25]).unwrap_err();
        assert_eq!(err.option, "Plan B");
        assert!(matches!(err.source, ScoringError::NormalizationError { .. }));
    }

    #[test]
    fn builds_option_from_lenient_text() {
        let option =
            DecisionOption::from_text("Option 1", "10€, 0€", "0.5, 0.5", ParseMode::Lenient)
                .unwrap();
        assert_eq!(option.outcomes(), &[10.0, 0.0]);
        assert_eq!(option.probabilities().as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn strict_text_with_units_fails_as_parse_error() {
        let err = DecisionOption::from_text("Option 1", "10€, 0€", "0.5, 0.5", ParseMode::Strict)
            .unwrap_err();
        assert_eq!(err.option, "Option 1");
        assert_eq!(err.source, ScoringError::parse_error(InputField::Outcomes, "10€"));
    }

    #[test]
    fn lenient_text_with_stray_words_fails_as_length_mismatch() {
        // Lenient parsing never fails outright; the dropped token surfaces
        // downstream as a length mismatch.
        let err = DecisionOption::from_text("Option 1", "10, lots", "0.5, 0.5", ParseMode::Lenient)
            .unwrap_err();
        assert_eq!(err.source, ScoringError::length_mismatch(1, 2));
    }

    #[test]
    fn empty_text_fails_as_empty_distribution() {
        let err = DecisionOption::from_text("Option 1", "", "", ParseMode::Lenient).unwrap_err();
        assert_eq!(err.source, ScoringError::EmptyDistribution);
    }

    #[test]
    fn unit_is_cosmetic() {
        let option = DecisionOption::new("Savings", vec![5.0], vec![1.0])
            .unwrap()
            .with_unit("€");
        assert_eq!(option.unit(), Some("€"));
    }
}
