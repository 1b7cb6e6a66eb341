//! Human-readable and JSON rendering of CLI results.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use typeduck_solver::{CompatFailureReason, TypeDescriptor};

use crate::batch::{BatchOutcome, BatchSummary};

#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub source: String,
    pub target: String,
    pub compatible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a CompatFailureReason>,
}

#[derive(Debug, Serialize)]
pub struct NormalizeReport<'a> {
    pub expr: &'a str,
    pub rendered: String,
    pub descriptor: &'a TypeDescriptor,
}

#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub summary: BatchSummary,
    pub cases: &'a [BatchOutcome],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Compatible,
    Incompatible,
    Unexpected,
    Error,
}

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn check(
        &self,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
        compatible: bool,
        reason: Option<&CompatFailureReason>,
    ) -> String {
        let status = if compatible {
            Status::Compatible
        } else {
            Status::Incompatible
        };
        let mut out = format!("{}: `{source}` -> `{target}`", self.status(status));
        if let Some(reason) = reason {
            let _ = write!(out, "\n  {reason}");
        }
        out
    }

    pub fn normalize(&self, descriptor: &TypeDescriptor) -> String {
        descriptor.to_string()
    }

    pub fn batch(&self, outcomes: &[BatchOutcome], summary: &BatchSummary) -> String {
        let mut out = String::new();
        for outcome in outcomes {
            let status = match (outcome.compatible, outcome.is_unexpected()) {
                (None, _) => Status::Error,
                (Some(_), true) => Status::Unexpected,
                (Some(true), false) => Status::Compatible,
                (Some(false), false) => Status::Incompatible,
            };
            let _ = write!(
                out,
                "#{} {}: `{}` -> `{}`",
                outcome.index,
                self.status(status),
                outcome.source,
                outcome.target
            );
            if let Some(error) = &outcome.error {
                let _ = write!(out, ": {error}");
            } else if let Some(expected) = outcome.expected.filter(|_| outcome.is_unexpected()) {
                let _ = write!(out, " (expected {})", verdict(expected));
            }
            out.push('\n');
        }
        let _ = write!(
            out,
            "{} cases: {} compatible, {} incompatible, {} unexpected, {} errors",
            summary.total, summary.compatible, summary.incompatible, summary.unexpected, summary.errors
        );
        out
    }

    pub fn error(&self, message: &str) -> String {
        format!("{}: {message}", self.status(Status::Error))
    }

    fn status(&self, status: Status) -> String {
        let label = match status {
            Status::Compatible => "compatible",
            Status::Incompatible => "incompatible",
            Status::Unexpected => "unexpected",
            Status::Error => "error",
        };

        if !self.color {
            return label.to_string();
        }

        match status {
            Status::Compatible => label.green().bold().to_string(),
            Status::Incompatible => label.yellow().bold().to_string(),
            Status::Unexpected | Status::Error => label.red().bold().to_string(),
        }
    }
}

fn verdict(compatible: bool) -> &'static str {
    if compatible { "compatible" } else { "incompatible" }
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod tests;
