//! Built-in example scenarios, replayable against the evaluate endpoint.

use serde::Serialize;

use super::dto::{EvaluateRequest, OptionPayload};

/// A named, ready-to-run scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleScenario {
    pub title: String,
    pub scenario: EvaluateRequest,
}

fn payload(name: &str, outcomes: &str, probabilities: &str) -> OptionPayload {
    OptionPayload {
        name: name.to_string(),
        outcomes: outcomes.to_string(),
        probabilities: probabilities.to_string(),
    }
}

/// The bundled example scenarios.
pub fn example_scenarios() -> Vec<ExampleScenario> {
    vec![
        ExampleScenario {
            title: "Investment (risky vs stable)".to_string(),
            scenario: EvaluateRequest {
                options: vec![
                    payload("Startup bet", "2000€, -500€", "0.2, 0.8"),
                    payload("Index fund", "300€, 50€", "0.6, 0.4"),
                    payload("Savings", "100€, 100€", "1, 0"),
                ],
                risk_aversion: Some(0.10),
                parse_mode: None,
                unit: Some("€".to_string()),
            },
        },
        ExampleScenario {
            title: "Study plan (time payoff)".to_string(),
            scenario: EvaluateRequest {
                options: vec![
                    payload("Plan A", "8 hours saved, 0", "0.6, 0.4"),
                    payload("Plan B", "5 hours saved, 5 hours saved", "1, 0"),
                ],
                risk_aversion: Some(0.15),
                parse_mode: None,
                unit: Some("hours".to_string()),
            },
        },
    ]
}
