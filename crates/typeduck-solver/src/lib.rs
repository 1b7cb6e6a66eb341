//! Structural Compatibility Solver
//!
//! This crate decides whether a value of one type expression is usable
//! where another is expected, purely on canonical descriptors:
//!
//! - **`TypeDescriptor`**: wildcard, or nullability flag plus an ordered set
//!   of atomic alternatives (`origin[parameters...]`)
//! - **`CompatChecker`**: the recursive decision procedure, with a memo of
//!   parameterized comparisons
//! - **Tracers**: the same procedure yields a boolean or the first failing
//!   rule, without duplicated logic
//!
//! Nothing here knows about any host annotation syntax; descriptors are
//! produced by `typeduck-lowering` or built directly.
pub mod compat;
mod diagnostics;
mod format;
pub mod recursion;
pub mod types;

pub use compat::{
    CacheStats, CompatChecker, DescriptorError, explain_failure, is_compatible,
    validate_descriptor, validate_descriptor_with_profile,
};
pub use diagnostics::{CompatFailureReason, CompatTracer, DiagnosticTracer, FastTracer, Side};
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};
pub use types::{Alternatives, Arity, AtomicType, Origin, TypeDescriptor};

// Test modules: most are loaded by their source files via #[path = "../tests/..."].
#[cfg(test)]
#[path = "../tests/type_law_tests.rs"]
mod type_law_tests;
#[cfg(test)]
#[path = "../tests/concurrent_tests.rs"]
mod concurrent_tests;
