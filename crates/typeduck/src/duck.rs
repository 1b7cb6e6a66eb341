//! Validation entry points.

use tracing::debug;
use typeduck_lowering::{TypeExpr, TypeLowering, parse_type_expr};
use typeduck_solver::{
    CompatChecker, CompatFailureReason, Side, TypeDescriptor, validate_descriptor,
};

use crate::error::DuckError;

/// A normalized source/target pair, ready to be checked.
///
/// Keeps the expressions as the caller wrote them so strict-mode errors can
/// quote them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDuck {
    source: TypeDescriptor,
    target: TypeDescriptor,
    source_expr: String,
    target_expr: String,
}

impl TypeDuck {
    /// Normalize both expressions.
    pub fn new(source: &TypeExpr, target: &TypeExpr) -> Result<Self, DuckError> {
        Self::lower_pair(source, target, source.to_string(), target.to_string())
    }

    /// Parse and normalize two annotation strings.
    pub fn parse(source: &str, target: &str) -> Result<Self, DuckError> {
        let source_expr = parse_type_expr(source)?;
        let target_expr = parse_type_expr(target)?;
        Self::lower_pair(
            &source_expr,
            &target_expr,
            source.trim().to_string(),
            target.trim().to_string(),
        )
    }

    /// Wrap descriptors built directly, rejecting ones the normalizer could
    /// not have produced. Their canonical rendering stands in for the
    /// original expressions.
    pub fn from_descriptors(source: TypeDescriptor, target: TypeDescriptor) -> Result<Self, DuckError> {
        validate_descriptor(&source, Side::Source)?;
        validate_descriptor(&target, Side::Target)?;
        Ok(Self {
            source_expr: source.to_string(),
            target_expr: target.to_string(),
            source,
            target,
        })
    }

    fn lower_pair(
        source: &TypeExpr,
        target: &TypeExpr,
        source_expr: String,
        target_expr: String,
    ) -> Result<Self, DuckError> {
        let mut lowering = TypeLowering::new();
        Ok(Self {
            source: lowering.lower(source)?,
            target: lowering.lower(target)?,
            source_expr,
            target_expr,
        })
    }

    pub fn source(&self) -> &TypeDescriptor {
        &self.source
    }

    pub fn target(&self) -> &TypeDescriptor {
        &self.target
    }

    /// The source expression as written.
    pub fn source_expr(&self) -> &str {
        &self.source_expr
    }

    pub fn target_expr(&self) -> &str {
        &self.target_expr
    }

    /// Whether the source is usable where the target is expected.
    ///
    /// With `raises`, an incompatible pair is reported as
    /// [`DuckError::Incompatible`] instead of `Ok(false)`.
    pub fn validate(&self, raises: bool) -> Result<bool, DuckError> {
        self.validate_with(&mut CompatChecker::new(), raises)
    }

    /// [`validate`](Self::validate) reusing a caller-owned checker and its cache.
    pub fn validate_with(&self, checker: &mut CompatChecker, raises: bool) -> Result<bool, DuckError> {
        let compatible = checker.is_compatible(&self.source, &self.target)?;
        debug!(source = %self.source, target = %self.target, compatible, "validated");
        if compatible || !raises {
            return Ok(compatible);
        }
        let reason = match checker.explain_failure(&self.source, &self.target)? {
            Some(reason) => reason,
            None => return Ok(true),
        };
        Err(DuckError::Incompatible {
            source_expr: self.source_expr.clone(),
            target_expr: self.target_expr.clone(),
            source_type: self.source.clone(),
            target_type: self.target.clone(),
            reason,
        })
    }

    /// The first rule rejecting this pair, or `None` when compatible.
    pub fn explain(&self) -> Result<Option<CompatFailureReason>, DuckError> {
        Ok(CompatChecker::new().explain_failure(&self.source, &self.target)?)
    }
}

/// Check two host expressions for compatibility.
pub fn types_validate(source: &TypeExpr, target: &TypeExpr, raises: bool) -> Result<bool, DuckError> {
    TypeDuck::new(source, target)?.validate(raises)
}

/// Check two annotation strings for compatibility.
pub fn validate_str(source: &str, target: &str, raises: bool) -> Result<bool, DuckError> {
    TypeDuck::parse(source, target)?.validate(raises)
}

#[cfg(test)]
#[path = "../tests/duck_tests.rs"]
mod tests;
