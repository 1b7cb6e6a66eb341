//! Compatibility engine.
//!
//! Decides whether a value described by a source descriptor is always
//! usable where a target descriptor is expected. Rules, in order:
//!
//! 1. Wildcard on either side: compatible.
//! 2. Either side has no usable alternative: incompatible.
//! 3. Source nullable, target not: incompatible.
//! 4. Some source alternative matches some target alternative
//!    (existential over both unions).
//!
//! Two atomic types match when their origins are equal and either one is
//! bare or every parameter position matches by the full procedure above
//! (universal over positions). The union rule is existential and the
//! parameter rule universal.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::trace;
use typeduck_common::limits::MAX_COMPAT_CACHE_ENTRIES;

use crate::diagnostics::{
    CompatFailureReason, CompatTracer, DiagnosticTracer, FastTracer, Side,
};
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::types::{Arity, AtomicType, Origin, TypeDescriptor};

/// A descriptor that could not have come from the normalizer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("`{origin}` takes {expected} parameter(s) but the {side} descriptor gives it {found}")]
    ArityMismatch {
        side: Side,
        origin: Origin,
        expected: usize,
        found: usize,
    },
    #[error("the {side} descriptor is nested deeper than {limit} levels")]
    TooDeep { side: Side, limit: u32 },
    #[error("the {side} descriptor has more than {limit} nodes")]
    TooLarge { side: Side, limit: u32 },
}

/// Check that `descriptor` respects origin arities and the depth limit.
pub fn validate_descriptor(descriptor: &TypeDescriptor, side: Side) -> Result<(), DescriptorError> {
    validate_descriptor_with_profile(descriptor, side, RecursionProfile::Descriptor)
}

/// [`validate_descriptor`] under explicit depth and node limits.
pub fn validate_descriptor_with_profile(
    descriptor: &TypeDescriptor,
    side: Side,
    profile: RecursionProfile,
) -> Result<(), DescriptorError> {
    let mut guard = RecursionGuard::with_profile(profile);
    validate_level(descriptor, side, &mut guard)
}

fn validate_level(
    descriptor: &TypeDescriptor,
    side: Side,
    guard: &mut RecursionGuard,
) -> Result<(), DescriptorError> {
    match guard.scope(|guard| validate_members(descriptor, side, guard)) {
        Ok(result) => result,
        Err(RecursionResult::IterationExceeded) => Err(DescriptorError::TooLarge {
            side,
            limit: guard.max_iterations(),
        }),
        Err(_) => Err(DescriptorError::TooDeep {
            side,
            limit: guard.max_depth(),
        }),
    }
}

fn validate_members(
    descriptor: &TypeDescriptor,
    side: Side,
    guard: &mut RecursionGuard,
) -> Result<(), DescriptorError> {
    for atomic in descriptor.alternatives() {
        let found = atomic.parameters().len();
        if let Arity::Fixed(expected) = atomic.origin().arity()
            && found != 0
            && found != expected
        {
            return Err(DescriptorError::ArityMismatch {
                side,
                origin: atomic.origin().clone(),
                expected,
                found,
            });
        }
        for param in atomic.parameters() {
            validate_level(param, side, guard)?;
        }
    }
    Ok(())
}

/// Hit/miss counters of a checker's atomic-pair cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Compatibility checker with a memo of parameterized atomic comparisons.
///
/// Reusing one checker across many questions lets repeated container shapes
/// (`dict[str, list[int]]` against the same target) skip the parameter walk.
/// The cache never changes an answer.
#[derive(Debug, Default)]
pub struct CompatChecker {
    cache: FxHashMap<(AtomicType, AtomicType), bool>,
    hits: u64,
    misses: u64,
}

impl CompatChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `source` is usable where `target` is expected.
    pub fn is_compatible(
        &mut self,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> Result<bool, DescriptorError> {
        validate_descriptor(source, Side::Source)?;
        validate_descriptor(target, Side::Target)?;
        Ok(self.check(source, target, &mut FastTracer))
    }

    /// The first rule that rejects `source` against `target`, or `None` when
    /// they are compatible.
    pub fn explain_failure(
        &mut self,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> Result<Option<CompatFailureReason>, DescriptorError> {
        validate_descriptor(source, Side::Source)?;
        validate_descriptor(target, Side::Target)?;
        Ok(self.explain(source, target))
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn explain(&mut self, source: &TypeDescriptor, target: &TypeDescriptor) -> Option<CompatFailureReason> {
        let mut tracer = DiagnosticTracer::new();
        if self.check(source, target, &mut tracer) {
            None
        } else {
            tracer.take_failure()
        }
    }

    fn check<T: CompatTracer>(
        &mut self,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
        tracer: &mut T,
    ) -> bool {
        let (s_alts, t_alts) = match (source, target) {
            (TypeDescriptor::Wildcard, _) | (_, TypeDescriptor::Wildcard) => {
                trace!(%source, %target, "compat: wildcard");
                return true;
            }
            (TypeDescriptor::Alternatives(s), TypeDescriptor::Alternatives(t)) => (s, t),
        };

        if s_alts.members().is_empty() {
            trace!(%source, "compat: source has no usable alternative");
            return tracer.on_mismatch(|| CompatFailureReason::InvalidType {
                side: Side::Source,
                descriptor: source.clone(),
            });
        }
        if t_alts.members().is_empty() {
            trace!(%target, "compat: target has no usable alternative");
            return tracer.on_mismatch(|| CompatFailureReason::InvalidType {
                side: Side::Target,
                descriptor: target.clone(),
            });
        }

        if s_alts.is_nullable() && !t_alts.is_nullable() {
            trace!(%source, %target, "compat: nullable source, non-nullable target");
            return tracer.on_mismatch(|| CompatFailureReason::NullabilityMismatch {
                source_type: source.clone(),
                target_type: target.clone(),
            });
        }

        let s_members = s_alts.members();
        let t_members = t_alts.members();
        if let ([s], [t]) = (s_members, t_members) {
            return self.check_atomic(s, t, tracer);
        }

        // Trial pairings must not leave a reason behind, so they run with
        // the fast tracer and only the overall failure is reported.
        for s in s_members {
            for t in t_members {
                if self.check_atomic(s, t, &mut FastTracer) {
                    trace!(%s, %t, "compat: alternative matched");
                    return true;
                }
            }
        }
        tracer.on_mismatch(|| CompatFailureReason::NoAlternativeMatches {
            source_type: source.clone(),
            target_type: target.clone(),
        })
    }

    fn check_atomic<T: CompatTracer>(
        &mut self,
        source: &AtomicType,
        target: &AtomicType,
        tracer: &mut T,
    ) -> bool {
        if source.origin() != target.origin() {
            return tracer.on_mismatch(|| CompatFailureReason::OriginMismatch {
                source_origin: source.origin().clone(),
                target_origin: target.origin().clone(),
            });
        }
        if source.is_bare() || target.is_bare() {
            return true;
        }

        let key = (source.clone(), target.clone());
        if let Some(&cached) = self.cache.get(&key) {
            // A cached failure carries no reason; recompute it when asked.
            if cached || !T::COLLECTS_REASONS {
                self.hits += 1;
                trace!(%source, %target, cached, "compat: cache hit");
                return cached;
            }
        }
        self.misses += 1;

        let result = self.check_parameters(source, target, tracer);
        if self.cache.len() >= MAX_COMPAT_CACHE_ENTRIES {
            self.cache.clear();
        }
        self.cache.insert(key, result);
        result
    }

    fn check_parameters<T: CompatTracer>(
        &mut self,
        source: &AtomicType,
        target: &AtomicType,
        tracer: &mut T,
    ) -> bool {
        let s_params = source.parameters();
        let t_params = target.parameters();
        if s_params.len() != t_params.len() {
            // Validation rejects this for fixed-arity origins.
            return tracer.on_mismatch(|| CompatFailureReason::ParameterCountMismatch {
                origin: source.origin().clone(),
                source_count: s_params.len(),
                target_count: t_params.len(),
            });
        }

        for (index, (s_param, t_param)) in s_params.iter().zip(t_params).enumerate() {
            if self.check(s_param, t_param, &mut FastTracer) {
                continue;
            }
            trace!(origin = %source.origin(), index, "compat: parameter mismatch");
            return tracer.on_mismatch(|| CompatFailureReason::ParameterMismatch {
                origin: source.origin().clone(),
                index,
                source_param: s_param.clone(),
                target_param: t_param.clone(),
                nested_reason: self.explain(s_param, t_param).map(Box::new),
            });
        }
        true
    }
}

/// Whether `source` is usable where `target` is expected, with a fresh checker.
pub fn is_compatible(source: &TypeDescriptor, target: &TypeDescriptor) -> Result<bool, DescriptorError> {
    CompatChecker::new().is_compatible(source, target)
}

/// The first rule rejecting `source` against `target`, with a fresh checker.
pub fn explain_failure(
    source: &TypeDescriptor,
    target: &TypeDescriptor,
) -> Result<Option<CompatFailureReason>, DescriptorError> {
    CompatChecker::new().explain_failure(source, target)
}

#[cfg(test)]
#[path = "../tests/compat_tests.rs"]
mod tests;
