//! EvaluateScenarioHandler - turns a raw scenario into a ranked evaluation.

use thiserror::Error;

use crate::config::ScoringConfig;
use crate::domain::scoring::{
    DecisionOption, Evaluation, EvaluationError, EvaluationRequest, ParseMode, ScoringEngine,
};

/// One raw option definition as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionInput {
    pub name: String,
    pub outcomes: String,
    pub probabilities: String,
}

/// Command to evaluate a batch of options under one λ.
///
/// `risk_aversion` and `parse_mode` fall back to configured defaults when
/// omitted. The optional unit is a shared display label for the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateScenarioCommand {
    pub options: Vec<OptionInput>,
    pub risk_aversion: Option<f64>,
    pub parse_mode: Option<ParseMode>,
    pub unit: Option<String>,
}

/// Errors surfaced by scenario evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateScenarioError {
    #[error("scenario must define at least one option")]
    NoOptions,

    #[error("scenario defines {got} options, maximum is {max}")]
    TooManyOptions { got: usize, max: usize },

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Handler for scenario evaluation.
///
/// Holds only the immutable scoring defaults; every evaluation is an
/// independent single-shot computation over request-local inputs, so the
/// handler is safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct EvaluateScenarioHandler {
    config: ScoringConfig,
}

impl EvaluateScenarioHandler {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Evaluates a scenario: parse and validate every option, score the
    /// batch, and rank it.
    ///
    /// The batch never partially computes. The first offending option aborts
    /// the whole evaluation, so a returned ranking always covers every
    /// requested option.
    pub fn handle(
        &self,
        cmd: EvaluateScenarioCommand,
    ) -> Result<Evaluation, EvaluateScenarioError> {
        if cmd.options.is_empty() {
            tracing::warn!("rejected scenario with no options");
            return Err(EvaluateScenarioError::NoOptions);
        }
        if cmd.options.len() > self.config.max_options {
            tracing::warn!(
                got = cmd.options.len(),
                max = self.config.max_options,
                "rejected oversized scenario"
            );
            return Err(EvaluateScenarioError::TooManyOptions {
                got: cmd.options.len(),
                max: self.config.max_options,
            });
        }

        let risk_aversion = cmd
            .risk_aversion
            .unwrap_or(self.config.default_risk_aversion);
        let parse_mode = cmd.parse_mode.unwrap_or(self.config.default_parse_mode);

        tracing::debug!(
            options = cmd.options.len(),
            risk_aversion,
            ?parse_mode,
            "evaluating scenario"
        );

        let mut options = Vec::with_capacity(cmd.options.len());
        for input in &cmd.options {
            let mut option = DecisionOption::from_text(
                input.name.as_str(),
                &input.outcomes,
                &input.probabilities,
                parse_mode,
            )?;
            if let Some(unit) = &cmd.unit {
                option = option.with_unit(unit.as_str());
            }
            options.push(option);
        }

        let evaluation = ScoringEngine::evaluate(EvaluationRequest {
            options,
            risk_aversion,
        });

        tracing::info!(
            options = evaluation.ranking.entries.len(),
            risk_aversion,
            top_tied = evaluation.ranking.top_tied,
            "scenario evaluated"
        );

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::ScoringError;

    fn handler() -> EvaluateScenarioHandler {
        EvaluateScenarioHandler::new(ScoringConfig::default())
    }

    fn input(name: &str, outcomes: &str, probabilities: &str) -> OptionInput {
        OptionInput {
            name: name.to_string(),
            outcomes: outcomes.to_string(),
            probabilities: probabilities.to_string(),
        }
    }

    fn command(options: Vec<OptionInput>) -> EvaluateScenarioCommand {
        EvaluateScenarioCommand {
            options,
            risk_aversion: None,
            parse_mode: None,
            unit: None,
        }
    }

    #[test]
    fn evaluates_a_two_option_scenario() {
        let cmd = EvaluateScenarioCommand {
            risk_aversion: Some(0.1),
            ..command(vec![
                input("Coin flip", "10€, 0€", "0.5, 0.5"),
                input("Sure thing", "6€, 6€", "1, 0"),
            ])
        };

        let evaluation = handler().handle(cmd).unwrap();
        let entries = &evaluation.ranking.entries;
        assert_eq!(entries[0].name, "Sure thing");
        assert_eq!(entries[1].name, "Coin flip");
        assert!((entries[1].score - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn falls_back_to_configured_defaults() {
        let evaluation = handler()
            .handle(command(vec![input("Only", "5", "1")]))
            .unwrap();
        // ScoringConfig::default() carries λ = 0.10.
        assert!((evaluation.risk_aversion - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_empty_scenario() {
        let result = handler().handle(command(vec![]));
        assert_eq!(result.unwrap_err(), EvaluateScenarioError::NoOptions);
    }

    #[test]
    fn rejects_oversized_scenario() {
        let options = (0..7)
            .map(|i| input(&format!("Option {}", i + 1), "5", "1"))
            .collect();
        let result = handler().handle(command(options));
        assert_eq!(
            result.unwrap_err(),
            EvaluateScenarioError::TooManyOptions { got: 7, max: 6 }
        );
    }

    #[test]
    fn aborts_whole_batch_on_first_invalid_option() {
        let result = handler().handle(command(vec![
            input("Good", "5", "1"),
            input("Bad", "1, 2", "0.5, 0.25"),
            input("Also good", "5", "1"),
        ]));

        match result.unwrap_err() {
            EvaluateScenarioError::Evaluation(err) => {
                assert_eq!(err.option, "Bad");
                assert!(matches!(err.source, ScoringError::NormalizationError { .. }));
            }
            other => panic!("expected evaluation error, got {:?}", other),
        }
    }

    #[test]
    fn reports_first_offending_option_in_input_order() {
        let result = handler().handle(command(vec![
            input("First bad", "1, 2, 3", "0.5, 0.5"),
            input("Second bad", "", ""),
        ]));

        match result.unwrap_err() {
            EvaluateScenarioError::Evaluation(err) => {
                assert_eq!(err.option, "First bad");
                assert_eq!(err.source, ScoringError::length_mismatch(3, 2));
            }
            other => panic!("expected evaluation error, got {:?}", other),
        }
    }

    #[test]
    fn strict_mode_override_rejects_units_in_text() {
        let cmd = EvaluateScenarioCommand {
            parse_mode: Some(ParseMode::Strict),
            ..command(vec![input("Option 1", "10€, 0€", "0.5, 0.5")])
        };

        let result = handler().handle(cmd);
        match result.unwrap_err() {
            EvaluateScenarioError::Evaluation(err) => {
                assert!(matches!(err.source, ScoringError::ParseError { .. }));
            }
            other => panic!("expected evaluation error, got {:?}", other),
        }
    }

    #[test]
    fn per_request_lambda_is_unrestricted() {
        // Config bounds only the default; an explicit λ outside [0, 1] is
        // accepted by the arithmetic.
        let cmd = EvaluateScenarioCommand {
            risk_aversion: Some(-0.5),
            ..command(vec![input("Risky", "10, 0", "0.5, 0.5")])
        };

        let evaluation = handler().handle(cmd).unwrap();
        // EV 5, Var 25, λ = -0.5 -> score 17.5
        assert!((evaluation.ranking.entries[0].score - 17.5).abs() < f64::EPSILON);
    }

    #[test]
    fn batch_shape_checks_run_before_option_validation() {
        let options = (0..7).map(|_| input("Bad", "", "")).collect();
        let result = handler().handle(command(options));
        assert!(matches!(
            result.unwrap_err(),
            EvaluateScenarioError::TooManyOptions { .. }
        ));
    }
}
