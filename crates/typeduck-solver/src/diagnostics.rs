//! Failure reasons and the tracer pattern used to collect them.
//!
//! ## Tracer Pattern
//!
//! The engine has one decision procedure, generic over a [`CompatTracer`].
//! Every place that decides "incompatible" reports through the tracer with a
//! closure that builds the reason:
//!
//! - [`FastTracer`] never calls the closure, so the boolean check allocates
//!   nothing and cannot drift from the explaining check.
//! - [`DiagnosticTracer`] calls it once and keeps the first reason.

use serde::Serialize;
use std::fmt;

use crate::types::{Origin, TypeDescriptor};

// =============================================================================
// Tracers
// =============================================================================

/// Receives mismatches found by the compatibility engine.
pub trait CompatTracer {
    /// Whether this tracer records reasons. Results cached by a checker are
    /// only reused when this is `false`, because a cached negative result has
    /// no reason attached.
    const COLLECTS_REASONS: bool;

    /// Called when a mismatch is detected.
    ///
    /// The `reason` closure is only called if the tracer keeps reasons.
    /// Returns `false`: the engine stops at the first mismatch either way.
    fn on_mismatch(&mut self, reason: impl FnOnce() -> CompatFailureReason) -> bool;
}

/// Tracer for plain boolean checks. Compiles down to `return false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastTracer;

impl CompatTracer for FastTracer {
    const COLLECTS_REASONS: bool = false;

    #[inline(always)]
    fn on_mismatch(&mut self, _reason: impl FnOnce() -> CompatFailureReason) -> bool {
        false
    }
}

/// Tracer that records the first failure reason.
#[derive(Debug, Default)]
pub struct DiagnosticTracer {
    failure: Option<CompatFailureReason>,
}

impl DiagnosticTracer {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Take the collected failure reason, leaving `None` in its place.
    pub fn take_failure(&mut self) -> Option<CompatFailureReason> {
        self.failure.take()
    }

    pub fn has_failure(&self) -> bool {
        self.failure.is_some()
    }
}

impl CompatTracer for DiagnosticTracer {
    const COLLECTS_REASONS: bool = true;

    #[inline]
    fn on_mismatch(&mut self, reason: impl FnOnce() -> CompatFailureReason) -> bool {
        if self.failure.is_none() {
            self.failure = Some(reason());
        }
        false
    }
}

// =============================================================================
// Failure reasons
// =============================================================================

/// Which side of a compatibility question a descriptor came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Source => "source",
            Side::Target => "target",
        })
    }
}

/// Why a source descriptor is not compatible with a target descriptor.
///
/// Variants follow the order in which the engine applies its rules, so the
/// reason for a failed check is always the first rule that rejected it.
/// [`ParameterMismatch`](Self::ParameterMismatch) nests the reason for the
/// failing parameter position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CompatFailureReason {
    /// One side is the invalid sentinel (or has no usable alternative).
    InvalidType {
        side: Side,
        descriptor: TypeDescriptor,
    },
    /// Source admits `None`, target does not.
    NullabilityMismatch {
        source_type: TypeDescriptor,
        target_type: TypeDescriptor,
    },
    /// The two atomic types belong to different families.
    OriginMismatch {
        source_origin: Origin,
        target_origin: Origin,
    },
    /// A parameter position of the same origin is incompatible.
    ParameterMismatch {
        origin: Origin,
        index: usize,
        source_param: TypeDescriptor,
        target_param: TypeDescriptor,
        nested_reason: Option<Box<CompatFailureReason>>,
    },
    /// Two parameterizations of a variadic origin differ in length.
    ParameterCountMismatch {
        origin: Origin,
        source_count: usize,
        target_count: usize,
    },
    /// No pair of alternatives across a union matched.
    NoAlternativeMatches {
        source_type: TypeDescriptor,
        target_type: TypeDescriptor,
    },
}

impl CompatFailureReason {
    /// Short name of the rule that produced this failure.
    pub fn rule(&self) -> &'static str {
        match self {
            CompatFailureReason::InvalidType { .. } => "invalid type",
            CompatFailureReason::NullabilityMismatch { .. } => "nullability direction",
            CompatFailureReason::OriginMismatch { .. } => "origin mismatch",
            CompatFailureReason::ParameterMismatch { .. } => "parameter mismatch",
            CompatFailureReason::ParameterCountMismatch { .. } => "parameter count mismatch",
            CompatFailureReason::NoAlternativeMatches { .. } => "no matching alternative",
        }
    }

    /// The innermost reason, following parameter nesting.
    pub fn root_cause(&self) -> &CompatFailureReason {
        let mut current = self;
        while let CompatFailureReason::ParameterMismatch {
            nested_reason: Some(nested),
            ..
        } = current
        {
            current = nested;
        }
        current
    }
}

impl fmt::Display for CompatFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatFailureReason::InvalidType { side, descriptor } => {
                write!(f, "{side} type `{descriptor}` is not a usable type")
            }
            CompatFailureReason::NullabilityMismatch {
                source_type,
                target_type,
            } => write!(
                f,
                "source may be absent but target requires presence (`{source_type}` vs `{target_type}`)"
            ),
            CompatFailureReason::OriginMismatch {
                source_origin,
                target_origin,
            } => write!(f, "origin mismatch: `{source_origin}` is not `{target_origin}`"),
            CompatFailureReason::ParameterMismatch {
                origin,
                index,
                source_param,
                target_param,
                nested_reason,
            } => {
                write!(
                    f,
                    "parameter {index} of `{origin}` does not match: `{source_param}` vs `{target_param}`"
                )?;
                if let Some(nested) = nested_reason {
                    write!(f, ": {nested}")?;
                }
                Ok(())
            }
            CompatFailureReason::ParameterCountMismatch {
                origin,
                source_count,
                target_count,
            } => write!(
                f,
                "`{origin}` with {source_count} parameter(s) cannot match `{origin}` with {target_count}"
            ),
            CompatFailureReason::NoAlternativeMatches {
                source_type,
                target_type,
            } => write!(
                f,
                "no alternative of `{source_type}` matches any alternative of `{target_type}`"
            ),
        }
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
