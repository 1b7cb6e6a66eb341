//! Type descriptor model.
//!
//! A [`TypeDescriptor`] is the canonical, host-independent form of a type
//! expression. Optional and union spellings are flattened into one shape: a
//! nullability flag plus an ordered set of non-null [`AtomicType`]s. The
//! universal `Any` marker is its own variant so that the engine can never
//! consult alternatives of a wildcard by accident.
//!
//! Descriptors are immutable values. They are cheap to clone relative to the
//! size of the expression they came from and compare structurally.

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::sync::Arc;

// =============================================================================
// Origin
// =============================================================================

/// Canonical family identity of an atomic type.
///
/// Every surface spelling of a family collapses to one variant: `list`,
/// `List` and `typing.List` are all [`Origin::Sequence`]. Families the engine
/// has no built-in knowledge of are carried by name in [`Origin::Named`] and
/// compared by that name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    Text,
    Bytes,
    Integer,
    Real,
    Boolean,
    Sequence,
    Mapping,
    Set,
    FrozenSet,
    Tuple,
    Type,
    /// A user-defined or otherwise unknown family, identified by its
    /// fully qualified spelling.
    Named(Arc<str>),
}

/// Number of type parameters an origin takes when parameterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many parameters (zero means the origin is not generic).
    Fixed(usize),
    /// Any number of parameters. Two parameterizations of a variadic origin
    /// with different lengths are simply incompatible.
    Variadic,
}

impl Arity {
    /// Whether a parameter list of length `count` is well-formed.
    ///
    /// The bare form (`count == 0`) is always accepted.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => count == 0 || count == n,
            Arity::Variadic => true,
        }
    }
}

impl Origin {
    /// Origin for a named family.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Origin::Named(name.into())
    }

    pub fn arity(&self) -> Arity {
        match self {
            Origin::Text | Origin::Bytes | Origin::Integer | Origin::Real | Origin::Boolean => {
                Arity::Fixed(0)
            }
            Origin::Sequence | Origin::Set | Origin::FrozenSet | Origin::Type => Arity::Fixed(1),
            Origin::Mapping => Arity::Fixed(2),
            Origin::Tuple | Origin::Named(_) => Arity::Variadic,
        }
    }

    /// Canonical spelling used when rendering descriptors.
    pub fn name(&self) -> &str {
        match self {
            Origin::Text => "str",
            Origin::Bytes => "bytes",
            Origin::Integer => "int",
            Origin::Real => "float",
            Origin::Boolean => "bool",
            Origin::Sequence => "list",
            Origin::Mapping => "dict",
            Origin::Set => "set",
            Origin::FrozenSet => "frozenset",
            Origin::Tuple => "tuple",
            Origin::Type => "type",
            Origin::Named(name) => name,
        }
    }

    /// Whether this origin can carry type parameters at all.
    #[inline]
    pub fn is_generic(&self) -> bool {
        self.arity() != Arity::Fixed(0)
    }
}

impl Serialize for Origin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// =============================================================================
// AtomicType
// =============================================================================

/// A single concrete or generic type: an origin plus its parameters.
///
/// An empty parameter list is the bare form (`list`, `typing.Dict`), which
/// the engine treats as compatible with any parameterization of the same
/// origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AtomicType {
    origin: Origin,
    parameters: Vec<TypeDescriptor>,
}

impl AtomicType {
    pub fn new(origin: Origin, parameters: Vec<TypeDescriptor>) -> Self {
        Self { origin, parameters }
    }

    /// The unparameterized form of `origin`.
    pub fn bare(origin: Origin) -> Self {
        Self {
            origin,
            parameters: Vec::new(),
        }
    }

    #[inline]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    #[inline]
    pub fn parameters(&self) -> &[TypeDescriptor] {
        &self.parameters
    }

    #[inline]
    pub fn is_bare(&self) -> bool {
        self.parameters.is_empty()
    }
}

// =============================================================================
// TypeDescriptor
// =============================================================================

/// Nullability flag plus the ordered set of non-null members.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Alternatives {
    nullable: bool,
    members: SmallVec<[AtomicType; 1]>,
}

impl Alternatives {
    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub fn members(&self) -> &[AtomicType] {
        &self.members
    }
}

/// Canonical representation of a type expression.
///
/// - [`TypeDescriptor::Wildcard`]: the universal `Any` marker.
/// - [`TypeDescriptor::Alternatives`]: everything else. One member is a
///   plain type, two or more a union; no members (and not nullable) is the
///   invalid sentinel, which never matches anything.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Wildcard,
    Alternatives(Alternatives),
}

impl TypeDescriptor {
    #[inline]
    pub fn wildcard() -> Self {
        TypeDescriptor::Wildcard
    }

    /// The "no usable type" sentinel.
    pub fn invalid() -> Self {
        TypeDescriptor::Alternatives(Alternatives {
            nullable: false,
            members: SmallVec::new(),
        })
    }

    /// A plain, non-nullable descriptor with one member.
    pub fn atomic(atomic: AtomicType) -> Self {
        let mut members = SmallVec::new();
        members.push(atomic);
        TypeDescriptor::Alternatives(Alternatives {
            nullable: false,
            members,
        })
    }

    /// Shorthand for the bare form of `origin`.
    pub fn of(origin: Origin) -> Self {
        Self::atomic(AtomicType::bare(origin))
    }

    /// Shorthand for `origin[parameters...]`.
    pub fn generic(origin: Origin, parameters: Vec<TypeDescriptor>) -> Self {
        Self::atomic(AtomicType::new(origin, parameters))
    }

    /// A union of `members`, keeping first-seen order and dropping duplicates.
    pub fn union(members: impl IntoIterator<Item = AtomicType>, nullable: bool) -> Self {
        let mut deduped: SmallVec<[AtomicType; 1]> = SmallVec::new();
        for member in members {
            if !deduped.contains(&member) {
                deduped.push(member);
            }
        }
        TypeDescriptor::Alternatives(Alternatives {
            nullable,
            members: deduped,
        })
    }

    /// This descriptor with the null alternative added. A wildcard already
    /// admits absence and is returned unchanged.
    pub fn into_nullable(self) -> Self {
        match self {
            TypeDescriptor::Wildcard => TypeDescriptor::Wildcard,
            TypeDescriptor::Alternatives(mut alts) => {
                alts.nullable = true;
                TypeDescriptor::Alternatives(alts)
            }
        }
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypeDescriptor::Wildcard)
    }

    /// `false` for the wildcard, whose nullability is never consulted.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeDescriptor::Wildcard => false,
            TypeDescriptor::Alternatives(alts) => alts.nullable,
        }
    }

    /// Non-null members; empty for the wildcard and the invalid sentinel.
    #[inline]
    pub fn alternatives(&self) -> &[AtomicType] {
        match self {
            TypeDescriptor::Wildcard => &[],
            TypeDescriptor::Alternatives(alts) => &alts.members,
        }
    }

    /// Whether this descriptor has no usable member and can never match.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        match self {
            TypeDescriptor::Wildcard => false,
            TypeDescriptor::Alternatives(alts) => alts.members.is_empty(),
        }
    }
}

impl From<AtomicType> for TypeDescriptor {
    fn from(atomic: AtomicType) -> Self {
        TypeDescriptor::atomic(atomic)
    }
}

impl From<Origin> for TypeDescriptor {
    fn from(origin: Origin) -> Self {
        TypeDescriptor::of(origin)
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
