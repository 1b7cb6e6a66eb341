//! Batch mode: many independent questions checked in parallel.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use typeduck::TypeDuck;
use typeduck_solver::CompatChecker;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BatchCase {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub expected: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub index: usize,
    pub source: String,
    pub target: String,
    pub expected: Option<bool>,
    /// `None` when the case could not be checked; see `error`.
    pub compatible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchOutcome {
    /// The case was checked and disagrees with its expected answer.
    pub fn is_unexpected(&self) -> bool {
        matches!((self.expected, self.compatible), (Some(expected), Some(actual)) if expected != actual)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub compatible: usize,
    pub incompatible: usize,
    pub unexpected: usize,
    pub errors: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let mut summary = BatchSummary {
            total: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome.compatible {
                Some(true) => summary.compatible += 1,
                Some(false) => summary.incompatible += 1,
                None => {}
            }
            if outcome.is_unexpected() {
                summary.unexpected += 1;
            }
            if outcome.is_error() {
                summary.errors += 1;
            }
        }
        summary
    }
}

pub fn load_cases(path: &Path) -> Result<Vec<BatchCase>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_cases(&text).with_context(|| format!("invalid batch file {}", path.display()))
}

pub fn parse_cases(text: &str) -> Result<Vec<BatchCase>> {
    Ok(serde_json::from_str(text)?)
}

/// Check every case, one checker per worker. Outcomes keep input order.
pub fn run_batch(cases: &[BatchCase]) -> Vec<BatchOutcome> {
    cases
        .par_iter()
        .enumerate()
        .map_init(CompatChecker::new, |checker, (index, case)| {
            let result = TypeDuck::parse(&case.source, &case.target)
                .and_then(|duck| duck.validate_with(checker, false));
            let (compatible, error) = match result {
                Ok(compatible) => (Some(compatible), None),
                Err(err) => (None, Some(err.to_string())),
            };
            BatchOutcome {
                index,
                source: case.source.clone(),
                target: case.target.clone(),
                expected: case.expected,
                compatible,
                error,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/batch_tests.rs"]
mod tests;
