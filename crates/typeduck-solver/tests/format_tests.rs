use crate::types::{AtomicType, Origin, TypeDescriptor};

#[test]
fn test_format_plain_and_wildcard() {
    assert_eq!(TypeDescriptor::of(Origin::Text).to_string(), "str");
    assert_eq!(TypeDescriptor::wildcard().to_string(), "Any");
    assert_eq!(TypeDescriptor::invalid().to_string(), "<invalid>");
}

#[test]
fn test_format_generic_uses_canonical_spelling() {
    let d = TypeDescriptor::generic(
        Origin::Mapping,
        vec![
            TypeDescriptor::of(Origin::Text),
            TypeDescriptor::generic(Origin::Sequence, vec![TypeDescriptor::of(Origin::Integer)]),
        ],
    );
    assert_eq!(d.to_string(), "dict[str, list[int]]");
}

#[test]
fn test_format_union_puts_none_last() {
    let d = TypeDescriptor::union(
        [AtomicType::bare(Origin::Text), AtomicType::bare(Origin::Bytes)],
        true,
    );
    assert_eq!(d.to_string(), "str | bytes | None");
}

#[test]
fn test_format_null_only_union() {
    let d = TypeDescriptor::union(std::iter::empty(), true);
    assert_eq!(d.to_string(), "None");
}

#[test]
fn test_format_named_origin() {
    let d = TypeDescriptor::generic(
        Origin::named("pkg.Box"),
        vec![TypeDescriptor::of(Origin::Real)],
    );
    assert_eq!(d.to_string(), "pkg.Box[float]");
}
