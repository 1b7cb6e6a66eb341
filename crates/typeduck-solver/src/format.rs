//! Canonical text rendering of descriptors.
//!
//! The output uses builtin spellings regardless of how the expression was
//! written (`typing.List[typing.Optional[str]]` renders as `list[str | None]`),
//! so two descriptors render identically iff they are equal.

use std::fmt;

use crate::types::{AtomicType, Origin, TypeDescriptor};

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for AtomicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin())?;
        if self.is_bare() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, param) in self.parameters().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return f.write_str("Any");
        }
        let members = self.alternatives();
        if members.is_empty() && !self.is_nullable() {
            return f.write_str("<invalid>");
        }
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{member}")?;
        }
        if self.is_nullable() {
            if !members.is_empty() {
                f.write_str(" | ")?;
            }
            f.write_str("None")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
