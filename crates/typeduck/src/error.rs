use thiserror::Error;
use typeduck_lowering::{LowerError, ParseError};
use typeduck_solver::{CompatFailureReason, DescriptorError, TypeDescriptor};

/// Everything a validation call can fail with.
///
/// `Parse`, `Lower` and `Descriptor` mean the input itself was malformed and
/// are returned regardless of strictness. `Incompatible` is only produced in
/// strict mode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DuckError {
    #[error("invalid annotation: {0}")]
    Parse(#[from] ParseError),
    #[error("malformed type expression: {0}")]
    Lower(#[from] LowerError),
    #[error("malformed descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
    #[error(
        "`{source_expr}` is not compatible with `{target_expr}` ({rule}): {reason}",
        rule = .reason.rule()
    )]
    Incompatible {
        source_expr: String,
        target_expr: String,
        source_type: TypeDescriptor,
        target_type: TypeDescriptor,
        reason: CompatFailureReason,
    },
}

impl DuckError {
    /// Whether the inputs were well-formed and simply did not match.
    pub fn is_incompatible(&self) -> bool {
        matches!(self, DuckError::Incompatible { .. })
    }
}
