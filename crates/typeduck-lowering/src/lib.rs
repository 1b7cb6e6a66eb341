//! Annotation lowering for typeduck.
//!
//! Bridges host annotations and the solver's descriptor model:
//!
//! - [`parser`]: annotation text to [`TypeExpr`]
//! - [`lower`]: [`TypeExpr`] to [`TypeDescriptor`](typeduck_solver::TypeDescriptor)
//!
//! Only this crate knows host spellings (`typing.List`, `Optional`, `None`).

pub mod expr;
mod lexer;
pub mod lower;
pub mod origins;
pub mod parser;

pub use expr::TypeExpr;
pub use lexer::TokenKind;
pub use lower::{LowerError, TypeLowering, lower_type_expr};
pub use parser::{ParseError, parse_type_expr};
