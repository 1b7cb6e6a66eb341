//! Depth and work bounding for recursive walks over descriptors.
//!
//! Descriptors are finite trees, so there is no cycle detection here: a
//! [`RecursionGuard`] only counts nesting depth and total entries. Limits
//! come from named [`RecursionProfile`] presets so call sites say what they
//! guard instead of repeating numbers.

use typeduck_common::limits::{MAX_DESCRIPTOR_DEPTH, MAX_PARSE_DEPTH};

// ---------------------------------------------------------------------------
// RecursionProfile
// ---------------------------------------------------------------------------

/// Named recursion limit presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Lowering a host expression into a descriptor, and re-validating a
    /// descriptor before the engine runs on it.
    ///
    /// depth = `MAX_DESCRIPTOR_DEPTH`, iterations = 1,000,000
    Descriptor,

    /// Recursive-descent parsing of annotation text.
    ///
    /// depth = `MAX_PARSE_DEPTH`, iterations = 1,000,000
    Parse,

    /// Custom limits for one-off or test scenarios.
    Custom { max_depth: u32, max_iterations: u32 },
}

impl RecursionProfile {
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::Descriptor => MAX_DESCRIPTOR_DEPTH,
            Self::Parse => MAX_PARSE_DEPTH,
            Self::Custom { max_depth, .. } => max_depth,
        }
    }

    pub const fn max_iterations(self) -> u32 {
        match self {
            Self::Descriptor => 1_000_000,
            Self::Parse => 1_000_000,
            Self::Custom { max_iterations, .. } => max_iterations,
        }
    }
}

// ---------------------------------------------------------------------------
// RecursionResult
// ---------------------------------------------------------------------------

/// Result of attempting to enter one more level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// Maximum recursion depth exceeded.
    DepthExceeded,
    /// Maximum iteration count exceeded.
    IterationExceeded,
}

impl RecursionResult {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }

    #[inline]
    pub fn is_exceeded(self) -> bool {
        !self.is_entered()
    }
}

// ---------------------------------------------------------------------------
// RecursionGuard
// ---------------------------------------------------------------------------

/// Tracks nesting depth and total work of a recursive walk.
///
/// ```ignore
/// let mut guard = RecursionGuard::with_profile(RecursionProfile::Descriptor);
/// match guard.enter() {
///     RecursionResult::Entered => {
///         let result = walk_children(&mut guard);
///         guard.leave();
///         result
///     }
///     denied => return Err(too_deep(denied)),
/// }
/// ```
///
/// Every successful [`enter`](Self::enter) must be paired with exactly one
/// [`leave`](Self::leave).
#[derive(Debug, Clone)]
pub struct RecursionGuard {
    depth: u32,
    max_reached: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
    exceeded: bool,
}

impl RecursionGuard {
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            depth: 0,
            max_reached: 0,
            iterations: 0,
            max_depth,
            max_iterations,
            exceeded: false,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth(), profile.max_iterations())
    }

    /// Try to descend one level.
    pub fn enter(&mut self) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);
        if self.iterations > self.max_iterations {
            self.exceeded = true;
            return RecursionResult::IterationExceeded;
        }
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }
        self.depth += 1;
        self.max_reached = self.max_reached.max(self.depth);
        RecursionResult::Entered
    }

    /// Return from one level entered with [`enter`](Self::enter).
    pub fn leave(&mut self) {
        debug_assert!(
            self.depth > 0,
            "RecursionGuard::leave() called without a matching enter()"
        );
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f` one level deeper, or report why that level was refused.
    pub fn scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Result<T, RecursionResult> {
        match self.enter() {
            RecursionResult::Entered => {
                let result = f(self);
                self.leave();
                Ok(result)
            }
            denied => Err(denied),
        }
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Deepest level reached so far.
    #[inline]
    pub fn max_reached(&self) -> u32 {
        self.max_reached
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
