//! typeduck: "will a value of this type be accepted there?"
//!
//! ```ignore
//! use typeduck::validate_str;
//!
//! assert_eq!(validate_str("List[str]", "Optional[list]", false), Ok(true));
//! assert_eq!(validate_str("Optional[str]", "str", false), Ok(false));
//! ```
//!
//! Both sides are normalized into descriptors by `typeduck-lowering` and
//! compared by `typeduck-solver`. Strict mode (`raises = true`) turns an
//! incompatible answer into a [`DuckError::Incompatible`] that quotes both
//! expressions as written and carries the failing rule.

mod duck;
mod error;

pub use duck::{TypeDuck, types_validate, validate_str};
pub use error::DuckError;
pub use typeduck_lowering::{LowerError, ParseError, TypeExpr, parse_type_expr};
pub use typeduck_solver::{CompatFailureReason, DescriptorError, TypeDescriptor};

#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod table_tests;
