//! Centralized limits for the typeduck crates.
//!
//! Type expressions are finite trees, so none of these limits exist to break
//! cycles. They bound the native stack used by the recursive parser, the
//! normalizer and the compatibility engine.
//!
//! # Solver recursion limits
//!
//! The engine reads its depth limit through
//! `typeduck_solver::recursion::RecursionProfile`, whose presets are defined
//! in terms of the constants below.

// =============================================================================
// Nesting Depth Limits
// =============================================================================

/// Maximum nesting depth of a type descriptor.
///
/// Counted in generic-parameter levels: `str` has depth 1,
/// `list[str]` depth 2, `dict[str, list[int | None]]` depth 3. Unions do not
/// add a level because they are flattened into a single descriptor, except
/// that the normalizer counts a union spelled inside another union
/// (`Union[int, Union[str, bytes]]`) as one more level.
///
/// The normalizer rejects deeper expressions with a construction error and
/// the engine re-validates descriptors built by hand against the same value.
///
/// Far above anything written by hand; it only has to keep the recursive
/// normalizer and engine within the native stack of a test thread.
///
/// # Example
///
/// ```text
/// list[list[list[ ... 256 levels ... [int] ... ]]]
/// ```
pub const MAX_DESCRIPTOR_DEPTH: u32 = 256;

/// Maximum bracket nesting accepted by the annotation text parser.
///
/// Higher than [`MAX_DESCRIPTOR_DEPTH`] so that a too-deep expression is
/// still parsed and then reported by the normalizer with a precise message,
/// while pathological input (thousands of `[`) is cut off before the
/// recursive-descent parser exhausts the stack.
pub const MAX_PARSE_DEPTH: u32 = 512;

/// Maximum number of memoized atomic comparisons kept by one checker.
///
/// When the cache reaches this size it is cleared rather than grown. The
/// cache only stores results for parameterized pairs, so real annotations
/// stay far below this.
pub const MAX_COMPAT_CACHE_ENTRIES: usize = 4096;

#[cfg(test)]
#[path = "../tests/limits_tests.rs"]
mod tests;
