//! Lowering of [`TypeExpr`] into [`TypeDescriptor`].
//!
//! All host-specific knowledge lives here: which names are special forms,
//! how `Optional`/`Union`/`|` flatten, and where `None` means "absent" versus
//! "no type at all". The engine only ever sees the result.

use indexmap::IndexSet;
use thiserror::Error;
use tracing::trace;
use typeduck_solver::{
    Arity, AtomicType, Origin, RecursionGuard, RecursionProfile, RecursionResult, TypeDescriptor,
};

use crate::expr::TypeExpr;
use crate::origins::{Resolved, SpecialForm, declared_arity, resolve_name};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LowerError {
    #[error("`{name}` takes {expected} type argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("`{name}` is not generic and cannot take type arguments")]
    NotGeneric { name: String },
    #[error("`{name}` cannot be subscripted")]
    NotSubscriptable { name: String },
    #[error("`{name}` requires type arguments")]
    MissingArguments { name: String },
    #[error("variadic tuple `{expr}` is not supported")]
    VariadicTuple { expr: String },
    #[error("`...` is only allowed as a tuple argument")]
    MisplacedEllipsis,
    #[error("type expression nested deeper than {limit} levels")]
    TooDeep { limit: u32 },
    #[error("type expression has more than {limit} nodes")]
    TooLarge { limit: u32 },
}

/// Members gathered while flattening one union spelling.
#[derive(Default)]
struct UnionParts {
    nullable: bool,
    wildcard: bool,
    members: IndexSet<AtomicType>,
}

/// Lowers expressions one at a time, sharing a depth guard.
pub struct TypeLowering {
    guard: RecursionGuard,
}

impl Default for TypeLowering {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeLowering {
    pub fn new() -> Self {
        Self::with_profile(RecursionProfile::Descriptor)
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self {
            guard: RecursionGuard::with_profile(profile),
        }
    }

    /// Lower one expression. A bare `None` here is the invalid sentinel.
    pub fn lower(&mut self, expr: &TypeExpr) -> Result<TypeDescriptor, LowerError> {
        self.enter()?;
        let result = self.lower_node(expr);
        self.guard.leave();
        if let Ok(descriptor) = &result {
            trace!(%expr, %descriptor, depth = self.guard.depth(), "lowered");
        }
        result
    }

    fn enter(&mut self) -> Result<(), LowerError> {
        match self.guard.enter() {
            RecursionResult::Entered => Ok(()),
            RecursionResult::DepthExceeded => Err(LowerError::TooDeep {
                limit: self.guard.max_depth(),
            }),
            RecursionResult::IterationExceeded => Err(LowerError::TooLarge {
                limit: self.guard.max_iterations(),
            }),
        }
    }

    fn lower_node(&mut self, expr: &TypeExpr) -> Result<TypeDescriptor, LowerError> {
        match expr {
            TypeExpr::Name { path } => Ok(match resolve_name(path) {
                Resolved::Special(SpecialForm::Any) => TypeDescriptor::wildcard(),
                Resolved::Special(SpecialForm::NoneType) => TypeDescriptor::invalid(),
                Resolved::Special(form @ (SpecialForm::Optional | SpecialForm::Union)) => {
                    return Err(LowerError::MissingArguments {
                        name: form.name().to_string(),
                    });
                }
                Resolved::Origin(origin) => TypeDescriptor::of(origin),
            }),
            TypeExpr::Subscript { base, args } => match resolve_name(base) {
                Resolved::Special(SpecialForm::Any | SpecialForm::NoneType) => {
                    Err(LowerError::NotSubscriptable { name: base.clone() })
                }
                Resolved::Special(SpecialForm::Optional | SpecialForm::Union) => {
                    self.lower_union(expr)
                }
                Resolved::Origin(origin) => {
                    if origin == Origin::Tuple && args.contains(&TypeExpr::Ellipsis) {
                        return Err(LowerError::VariadicTuple {
                            expr: expr.to_string(),
                        });
                    }
                    match declared_arity(&origin) {
                        Arity::Fixed(0) => {
                            return Err(LowerError::NotGeneric { name: base.clone() });
                        }
                        Arity::Fixed(expected) if args.len() != expected => {
                            return Err(LowerError::ArityMismatch {
                                name: base.clone(),
                                expected,
                                found: args.len(),
                            });
                        }
                        _ => {}
                    }
                    let parameters = args
                        .iter()
                        .map(|arg| self.lower(arg))
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(TypeDescriptor::generic(origin, parameters))
                }
            },
            TypeExpr::Union { .. } => self.lower_union(expr),
            TypeExpr::Ellipsis => Err(LowerError::MisplacedEllipsis),
        }
    }

    fn lower_union(&mut self, expr: &TypeExpr) -> Result<TypeDescriptor, LowerError> {
        let mut parts = UnionParts::default();
        self.collect_members(expr, &mut parts)?;
        if parts.wildcard {
            return Ok(TypeDescriptor::wildcard());
        }
        Ok(TypeDescriptor::union(parts.members, parts.nullable))
    }

    /// Flatten `expr` into `parts`. Inside a union `None` is the null marker
    /// and `Any` absorbs the whole union.
    fn collect_members(&mut self, expr: &TypeExpr, parts: &mut UnionParts) -> Result<(), LowerError> {
        match expr {
            TypeExpr::Union { members } => self.collect_all(members, parts),
            TypeExpr::Subscript { base, args } => match resolve_name(base) {
                Resolved::Special(SpecialForm::Optional) => {
                    if args.len() != 1 {
                        return Err(LowerError::ArityMismatch {
                            name: base.clone(),
                            expected: 1,
                            found: args.len(),
                        });
                    }
                    parts.nullable = true;
                    self.collect_all(args, parts)
                }
                Resolved::Special(SpecialForm::Union) => {
                    if args.is_empty() {
                        return Err(LowerError::MissingArguments { name: base.clone() });
                    }
                    self.collect_all(args, parts)
                }
                _ => self.collect_lowered(expr, parts),
            },
            TypeExpr::Name { path } => match resolve_name(path) {
                Resolved::Special(SpecialForm::NoneType) => {
                    parts.nullable = true;
                    Ok(())
                }
                _ => self.collect_lowered(expr, parts),
            },
            TypeExpr::Ellipsis => Err(LowerError::MisplacedEllipsis),
        }
    }

    /// A nested union spelling counts as one more level; plain members are
    /// lowered at the level of the enclosing union.
    fn collect_all(&mut self, members: &[TypeExpr], parts: &mut UnionParts) -> Result<(), LowerError> {
        for member in members {
            if !is_union_spelling(member) {
                self.collect_members(member, parts)?;
                continue;
            }
            self.enter()?;
            let result = self.collect_members(member, parts);
            self.guard.leave();
            result?;
        }
        Ok(())
    }

    fn collect_lowered(&mut self, expr: &TypeExpr, parts: &mut UnionParts) -> Result<(), LowerError> {
        let descriptor = self.lower_node(expr)?;
        if descriptor.is_wildcard() {
            parts.wildcard = true;
        }
        parts.members.extend(descriptor.alternatives().iter().cloned());
        Ok(())
    }
}

fn is_union_spelling(expr: &TypeExpr) -> bool {
    match expr {
        TypeExpr::Union { .. } => true,
        TypeExpr::Subscript { base, .. } => matches!(
            resolve_name(base),
            Resolved::Special(SpecialForm::Optional | SpecialForm::Union)
        ),
        TypeExpr::Name { .. } | TypeExpr::Ellipsis => false,
    }
}

/// Lower a single expression with a fresh depth guard.
pub fn lower_type_expr(expr: &TypeExpr) -> Result<TypeDescriptor, LowerError> {
    TypeLowering::new().lower(expr)
}

#[cfg(test)]
#[path = "../tests/lower_tests.rs"]
mod tests;
