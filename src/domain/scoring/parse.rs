//! Numeric-list parsing for raw option input.
//!
//! Two parsing policies exist because they behave differently on the same
//! malformed input (stray words, currency symbols, repeated decimal points).
//! They are deliberately kept separate as a configuration choice rather than
//! merged into one heuristic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{InputField, ScoringError};

/// Signed-decimal pattern used by lenient extraction: optional leading minus,
/// then digits with an optional fraction, or a bare leading decimal point.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?(?:\d+\.?\d*|\.\d+)").expect("valid number pattern"));

/// How raw text is turned into an ordered list of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Split on commas and require every non-empty segment to parse as a
    /// number. Rejects input containing units or other stray text.
    Strict,
    /// Extract every signed decimal in order of appearance, ignoring all
    /// non-numeric characters. Never fails; malformed input surfaces as a
    /// shorter (possibly empty) list, so callers must check lengths.
    #[default]
    Lenient,
}

/// Parses free-form text into an ordered list of numbers.
///
/// Both modes preserve input order and never deduplicate. `field` identifies
/// which input list is being parsed so strict-mode errors can name it.
pub fn parse_number_list(
    text: &str,
    mode: ParseMode,
    field: InputField,
) -> Result<Vec<f64>, ScoringError> {
    match mode {
        ParseMode::Strict => parse_strict(text, field),
        ParseMode::Lenient => Ok(parse_lenient(text)),
    }
}

fn parse_strict(text: &str, field: InputField) -> Result<Vec<f64>, ScoringError> {
    let mut numbers = Vec::new();
    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let value = segment
            .parse::<f64>()
            .map_err(|_| ScoringError::parse_error(field, segment))?;
        numbers.push(value);
    }
    Ok(numbers)
}

fn parse_lenient(text: &str) -> Vec<f64> {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}
