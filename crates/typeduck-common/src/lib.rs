//! Common types and utilities for the typeduck crates.
//!
//! This crate provides foundational pieces shared by the solver, the
//! lowering front end and the CLI:
//! - Centralized nesting limits
//! - Byte spans for locating errors in annotation text

// Centralized limits and thresholds
pub mod limits;

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;
