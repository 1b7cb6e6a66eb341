use super::*;

fn int() -> TypeDescriptor {
    TypeDescriptor::of(Origin::Integer)
}

#[test]
fn test_atomic_descriptor_shape() {
    let d = TypeDescriptor::of(Origin::Text);
    assert!(!d.is_wildcard());
    assert!(!d.is_nullable());
    assert!(!d.is_invalid());
    assert_eq!(d.alternatives().len(), 1);
    assert_eq!(d.alternatives()[0].origin(), &Origin::Text);
    assert!(d.alternatives()[0].is_bare());
}

#[test]
fn test_wildcard_has_no_alternatives_and_ignores_nullability() {
    let any = TypeDescriptor::wildcard();
    assert!(any.is_wildcard());
    assert!(any.alternatives().is_empty());
    assert!(!any.is_invalid());
    assert_eq!(any.clone().into_nullable(), any);
}

#[test]
fn test_invalid_sentinel() {
    let invalid = TypeDescriptor::invalid();
    assert!(invalid.is_invalid());
    assert!(!invalid.is_nullable());
    assert!(!invalid.is_wildcard());
}

#[test]
fn test_union_keeps_order_and_drops_duplicates() {
    let d = TypeDescriptor::union(
        [
            AtomicType::bare(Origin::Text),
            AtomicType::bare(Origin::Integer),
            AtomicType::bare(Origin::Text),
        ],
        true,
    );
    let origins: Vec<_> = d.alternatives().iter().map(|a| a.origin().clone()).collect();
    assert_eq!(origins, vec![Origin::Text, Origin::Integer]);
    assert!(d.is_nullable());
}

#[test]
fn test_union_distinguishes_parameterizations() {
    let d = TypeDescriptor::union(
        [
            AtomicType::bare(Origin::Sequence),
            AtomicType::new(Origin::Sequence, vec![int()]),
        ],
        false,
    );
    assert_eq!(d.alternatives().len(), 2);
}

#[test]
fn test_into_nullable_marks_only_the_flag() {
    let d = TypeDescriptor::generic(Origin::Sequence, vec![int()]).into_nullable();
    assert!(d.is_nullable());
    assert_eq!(d.alternatives().len(), 1);
    assert_eq!(d.alternatives()[0].parameters(), &[int()]);
}

#[test]
fn test_origin_arity() {
    assert_eq!(Origin::Text.arity(), Arity::Fixed(0));
    assert_eq!(Origin::Sequence.arity(), Arity::Fixed(1));
    assert_eq!(Origin::Mapping.arity(), Arity::Fixed(2));
    assert_eq!(Origin::Tuple.arity(), Arity::Variadic);
    assert_eq!(Origin::named("pkg.Widget").arity(), Arity::Variadic);
    assert!(!Origin::Boolean.is_generic());
    assert!(Origin::Type.is_generic());
}

#[test]
fn test_arity_accepts_bare_form() {
    assert!(Arity::Fixed(2).accepts(0));
    assert!(Arity::Fixed(2).accepts(2));
    assert!(!Arity::Fixed(2).accepts(1));
    assert!(!Arity::Fixed(0).accepts(1));
    assert!(Arity::Variadic.accepts(7));
}

#[test]
fn test_named_origins_compare_by_name() {
    assert_eq!(Origin::named("a.B"), Origin::named(String::from("a.B")));
    assert_ne!(Origin::named("a.B"), Origin::named("a.C"));
    assert_ne!(Origin::named("list"), Origin::Sequence);
}

#[test]
fn test_descriptor_serializes_with_kind_tag() {
    let d = TypeDescriptor::generic(
        Origin::Mapping,
        vec![TypeDescriptor::of(Origin::Text), TypeDescriptor::wildcard()],
    );
    let json = serde_json::to_string(&d).expect("descriptor serializes");
    assert!(json.contains("\"kind\":\"alternatives\""));
    assert!(json.contains("\"origin\":\"dict\""));
    assert!(json.contains("\"kind\":\"wildcard\""));
}
