//! Scoring defaults configuration

use serde::Deserialize;

use crate::domain::scoring::ParseMode;

use super::error::ValidationError;

/// Defaults applied to evaluation requests that omit them.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Risk aversion (λ) used when a request does not supply one.
    ///
    /// Constrained to [0, 1] here, mirroring the range presented to users;
    /// the scoring arithmetic itself accepts any per-request λ unrestricted.
    #[serde(default = "default_risk_aversion")]
    pub default_risk_aversion: f64,

    /// Parse mode used when a request does not supply one.
    #[serde(default)]
    pub default_parse_mode: ParseMode,

    /// Maximum number of options accepted in a single scenario.
    #[serde(default = "default_max_options")]
    pub max_options: usize,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.default_risk_aversion.is_finite()
            || !(0.0..=1.0).contains(&self.default_risk_aversion)
        {
            return Err(ValidationError::InvalidDefaultRiskAversion);
        }
        if self.max_options == 0 {
            return Err(ValidationError::InvalidMaxOptions);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_risk_aversion: default_risk_aversion(),
            default_parse_mode: ParseMode::default(),
            max_options: default_max_options(),
        }
    }
}

fn default_risk_aversion() -> f64 {
    0.10
}

fn default_max_options() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_config_defaults() {
        let config = ScoringConfig::default();
        assert!((config.default_risk_aversion - 0.10).abs() < f64::EPSILON);
        assert_eq!(config.default_parse_mode, ParseMode::Lenient);
        assert_eq!(config.max_options, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_out_of_range_risk_aversion() {
        let config = ScoringConfig {
            default_risk_aversion: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ScoringConfig {
            default_risk_aversion: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_risk_aversion() {
        let config = ScoringConfig {
            default_risk_aversion: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_max_options() {
        let config = ScoringConfig {
            max_options: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_range_boundaries_are_valid() {
        for lambda in [0.0, 1.0] {
            let config = ScoringConfig {
                default_risk_aversion: lambda,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }
}
