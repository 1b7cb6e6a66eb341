use super::*;

fn origin_of(path: &str) -> Origin {
    match resolve_name(path) {
        Resolved::Origin(origin) => origin,
        Resolved::Special(form) => panic!("{path:?} resolved to special form {}", form.name()),
    }
}

#[test]
fn test_typing_aliases_share_runtime_origin() {
    assert_eq!(origin_of("typing.Sequence"), origin_of("collections.abc.Sequence"));
    assert_eq!(origin_of("Sequence"), Origin::named("collections.abc.Sequence"));
    assert_eq!(origin_of("typing.Mapping"), origin_of("collections.abc.Mapping"));
    assert_eq!(origin_of("typing.Iterable"), origin_of("collections.abc.Iterable"));
    assert_eq!(origin_of("typing_extensions.Deque"), origin_of("collections.deque"));
    assert_eq!(origin_of("typing.DefaultDict"), origin_of("collections.defaultdict"));
}

#[test]
fn test_abstract_set_is_not_builtin_set() {
    assert_eq!(origin_of("typing.AbstractSet"), Origin::named("collections.abc.Set"));
    assert_eq!(origin_of("collections.abc.Set"), Origin::named("collections.abc.Set"));
    assert_eq!(origin_of("typing.Set"), Origin::Set);
}

#[test]
fn test_alias_names_only_match_whole_paths() {
    assert_eq!(origin_of("app.Mapping"), Origin::named("app.Mapping"));
    assert_eq!(origin_of("collections.abc.Widget"), Origin::named("collections.abc.Widget"));
}

#[test]
fn test_declared_arity() {
    assert_eq!(declared_arity(&Origin::Mapping), Arity::Fixed(2));
    assert_eq!(declared_arity(&origin_of("typing.Mapping")), Arity::Fixed(2));
    assert_eq!(declared_arity(&origin_of("typing.Generator")), Arity::Fixed(3));
    assert_eq!(declared_arity(&origin_of("typing.Hashable")), Arity::Fixed(0));
    assert_eq!(declared_arity(&origin_of("typing.Callable")), Arity::Variadic);
    assert_eq!(declared_arity(&origin_of("app.Widget")), Arity::Variadic);
}
