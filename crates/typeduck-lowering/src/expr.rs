//! Host-side type expressions.
//!
//! `TypeExpr` mirrors how a `typing`-style annotation is written, before any
//! meaning is assigned to names: `Optional`, `Union`, `Any` and `None` are
//! just names here. [`crate::lower`] interprets them.

use serde::Serialize;
use std::fmt;
use std::ops::BitOr;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    /// A possibly dotted name: `str`, `typing.List`, `None`, `app.Widget`.
    Name { path: String },
    /// A subscripted name: `Dict[str, int]`, `Optional[str]`.
    Subscript { base: String, args: Vec<TypeExpr> },
    /// The `a | b | c` operator form.
    Union { members: Vec<TypeExpr> },
    /// The `...` literal, as in `Tuple[int, ...]`.
    Ellipsis,
}

impl TypeExpr {
    pub fn name(path: impl Into<String>) -> Self {
        TypeExpr::Name { path: path.into() }
    }

    pub fn subscript(base: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Subscript {
            base: base.into(),
            args,
        }
    }

    pub fn union(members: Vec<TypeExpr>) -> Self {
        TypeExpr::Union { members }
    }

    pub fn any() -> Self {
        Self::name("typing.Any")
    }

    pub fn none() -> Self {
        Self::name("None")
    }

    pub fn optional(inner: TypeExpr) -> Self {
        Self::subscript("typing.Optional", vec![inner])
    }
}

/// `a | b` builds (or extends) an operator union.
impl BitOr for TypeExpr {
    type Output = TypeExpr;

    fn bitor(self, rhs: TypeExpr) -> TypeExpr {
        match self {
            TypeExpr::Union { mut members } => {
                members.push(rhs);
                TypeExpr::Union { members }
            }
            lhs => TypeExpr::Union {
                members: vec![lhs, rhs],
            },
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Name { path } => f.write_str(path),
            TypeExpr::Subscript { base, args } => {
                write!(f, "{base}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str("]")
            }
            TypeExpr::Union { members } => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            TypeExpr::Ellipsis => f.write_str("..."),
        }
    }
}
