use super::*;
use crate::types::{Origin, TypeDescriptor};

#[test]
fn test_fast_tracer_never_builds_reason() {
    let mut tracer = FastTracer;
    let continued = tracer.on_mismatch(|| panic!("FastTracer must not build reasons"));
    assert!(!continued);
}

#[test]
fn test_diagnostic_tracer_keeps_first_reason() {
    let mut tracer = DiagnosticTracer::new();
    assert!(!tracer.has_failure());
    tracer.on_mismatch(|| CompatFailureReason::OriginMismatch {
        source_origin: Origin::Text,
        target_origin: Origin::Integer,
    });
    tracer.on_mismatch(|| CompatFailureReason::OriginMismatch {
        source_origin: Origin::Bytes,
        target_origin: Origin::Real,
    });
    assert_eq!(
        tracer.take_failure(),
        Some(CompatFailureReason::OriginMismatch {
            source_origin: Origin::Text,
            target_origin: Origin::Integer,
        })
    );
    assert!(tracer.take_failure().is_none());
}

#[test]
fn test_rule_names() {
    let nullability = CompatFailureReason::NullabilityMismatch {
        source_type: TypeDescriptor::of(Origin::Text).into_nullable(),
        target_type: TypeDescriptor::of(Origin::Text),
    };
    assert_eq!(nullability.rule(), "nullability direction");
    let invalid = CompatFailureReason::InvalidType {
        side: Side::Target,
        descriptor: TypeDescriptor::invalid(),
    };
    assert_eq!(invalid.rule(), "invalid type");
}

#[test]
fn test_nullability_message() {
    let reason = CompatFailureReason::NullabilityMismatch {
        source_type: TypeDescriptor::of(Origin::Text).into_nullable(),
        target_type: TypeDescriptor::of(Origin::Text),
    };
    assert_eq!(
        reason.to_string(),
        "source may be absent but target requires presence (`str | None` vs `str`)"
    );
}

#[test]
fn test_nested_parameter_message_and_root_cause() {
    let inner = CompatFailureReason::OriginMismatch {
        source_origin: Origin::Text,
        target_origin: Origin::Integer,
    };
    let reason = CompatFailureReason::ParameterMismatch {
        origin: Origin::Sequence,
        index: 0,
        source_param: TypeDescriptor::of(Origin::Text),
        target_param: TypeDescriptor::of(Origin::Integer),
        nested_reason: Some(Box::new(inner.clone())),
    };
    assert_eq!(
        reason.to_string(),
        "parameter 0 of `list` does not match: `str` vs `int`: origin mismatch: `str` is not `int`"
    );
    assert_eq!(reason.root_cause(), &inner);
}

#[test]
fn test_invalid_type_message_names_side() {
    let reason = CompatFailureReason::InvalidType {
        side: Side::Source,
        descriptor: TypeDescriptor::invalid(),
    };
    assert_eq!(reason.to_string(), "source type `<invalid>` is not a usable type");
}
