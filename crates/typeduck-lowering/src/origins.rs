//! Spelling table: host names to canonical origins and special forms.

use typeduck_solver::{Arity, Origin};

/// Module prefixes that do not change what a name refers to.
const TRANSPARENT_PREFIXES: &[&str] = &["typing.", "typing_extensions.", "builtins."];

/// Typing aliases of runtime classes outside `builtins`.
///
/// Each row is `(alias, runtime path, arity)`. The alias and the runtime path
/// both resolve to `Origin::Named(runtime path)`, so `typing.Sequence` and
/// `collections.abc.Sequence` are the same family.
const RUNTIME_ALIASES: &[(&str, &str, Arity)] = &[
    ("Awaitable", "collections.abc.Awaitable", Arity::Fixed(1)),
    ("Coroutine", "collections.abc.Coroutine", Arity::Fixed(3)),
    ("AsyncIterable", "collections.abc.AsyncIterable", Arity::Fixed(1)),
    ("AsyncIterator", "collections.abc.AsyncIterator", Arity::Fixed(1)),
    ("AsyncGenerator", "collections.abc.AsyncGenerator", Arity::Fixed(2)),
    ("Iterable", "collections.abc.Iterable", Arity::Fixed(1)),
    ("Iterator", "collections.abc.Iterator", Arity::Fixed(1)),
    ("Generator", "collections.abc.Generator", Arity::Fixed(3)),
    ("Reversible", "collections.abc.Reversible", Arity::Fixed(1)),
    ("Container", "collections.abc.Container", Arity::Fixed(1)),
    ("Collection", "collections.abc.Collection", Arity::Fixed(1)),
    ("Callable", "collections.abc.Callable", Arity::Variadic),
    ("AbstractSet", "collections.abc.Set", Arity::Fixed(1)),
    ("MutableSet", "collections.abc.MutableSet", Arity::Fixed(1)),
    ("Mapping", "collections.abc.Mapping", Arity::Fixed(2)),
    ("MutableMapping", "collections.abc.MutableMapping", Arity::Fixed(2)),
    ("Sequence", "collections.abc.Sequence", Arity::Fixed(1)),
    ("MutableSequence", "collections.abc.MutableSequence", Arity::Fixed(1)),
    ("MappingView", "collections.abc.MappingView", Arity::Fixed(1)),
    ("KeysView", "collections.abc.KeysView", Arity::Fixed(1)),
    ("ItemsView", "collections.abc.ItemsView", Arity::Fixed(2)),
    ("ValuesView", "collections.abc.ValuesView", Arity::Fixed(1)),
    ("Hashable", "collections.abc.Hashable", Arity::Fixed(0)),
    ("Sized", "collections.abc.Sized", Arity::Fixed(0)),
    ("Deque", "collections.deque", Arity::Fixed(1)),
    ("DefaultDict", "collections.defaultdict", Arity::Fixed(2)),
    ("OrderedDict", "collections.OrderedDict", Arity::Fixed(2)),
    ("Counter", "collections.Counter", Arity::Fixed(1)),
    ("ChainMap", "collections.ChainMap", Arity::Fixed(2)),
];

/// Names with meaning beyond "a type family".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialForm {
    Any,
    NoneType,
    Optional,
    Union,
}

impl SpecialForm {
    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Any => "Any",
            SpecialForm::NoneType => "None",
            SpecialForm::Optional => "Optional",
            SpecialForm::Union => "Union",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    Special(SpecialForm),
    Origin(Origin),
}

/// `path` without a leading `typing.`-like prefix.
pub fn strip_prefix(path: &str) -> &str {
    TRANSPARENT_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(path)
}

fn runtime_alias(path: &str, name: &str) -> Option<&'static (&'static str, &'static str, Arity)> {
    RUNTIME_ALIASES
        .iter()
        .find(|(_, runtime, _)| *runtime == path)
        .or_else(|| RUNTIME_ALIASES.iter().find(|(alias, _, _)| *alias == name))
}

/// Resolve a possibly dotted name.
pub fn resolve_name(path: &str) -> Resolved {
    let name = strip_prefix(path);
    let origin = match name {
        "Any" => return Resolved::Special(SpecialForm::Any),
        "None" | "NoneType" => return Resolved::Special(SpecialForm::NoneType),
        "Optional" => return Resolved::Special(SpecialForm::Optional),
        "Union" => return Resolved::Special(SpecialForm::Union),
        "str" | "Text" => Origin::Text,
        "bytes" => Origin::Bytes,
        "int" => Origin::Integer,
        "float" => Origin::Real,
        "bool" => Origin::Boolean,
        "list" | "List" => Origin::Sequence,
        "dict" | "Dict" => Origin::Mapping,
        "set" | "Set" => Origin::Set,
        "frozenset" | "FrozenSet" => Origin::FrozenSet,
        "tuple" | "Tuple" => Origin::Tuple,
        "type" | "Type" => Origin::Type,
        other => match runtime_alias(path, other) {
            Some((_, runtime, _)) => Origin::named(*runtime),
            None => Origin::named(other),
        },
    };
    Resolved::Origin(origin)
}

/// Number of type arguments `origin` takes when subscripted.
///
/// Runtime classes from the alias table keep their fixed arity; other named
/// families accept any number.
pub fn declared_arity(origin: &Origin) -> Arity {
    match origin {
        Origin::Named(name) => RUNTIME_ALIASES
            .iter()
            .find(|(_, runtime, _)| **runtime == **name)
            .map_or(Arity::Variadic, |(_, _, arity)| *arity),
        builtin => builtin.arity(),
    }
}

#[cfg(test)]
#[path = "../tests/origins_tests.rs"]
mod tests;
