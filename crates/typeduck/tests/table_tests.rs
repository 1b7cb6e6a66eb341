//! End-to-end compatibility table over annotation text.

use super::*;

const CASES: &[(&str, &str, bool)] = &[
    // Simple matches
    ("str", "None", false),
    ("None", "str", false),
    ("str", "str", true),
    ("list", "list", true),
    ("list", "typing.List", true),
    ("typing.List", "list", true),
    ("typing.List[int]", "list", true),
    ("list", "typing.List[int]", true),
    ("str", "typing.Any", true),
    ("typing.Any", "int", true),
    ("typing.List", "typing.List", true),
    ("typing.List[str]", "typing.List[str]", true),
    ("typing.Optional[str]", "typing.Optional[str]", true),
    ("str", "int", false),
    ("str", "list", false),
    ("str", "typing.List", false),
    ("dict", "typing.List", false),
    ("typing.List", "dict", false),
    ("typing.Tuple", "typing.List", false),
    ("typing.Tuple", "typing.Dict", false),
    ("typing.Dict", "typing.List", false),
    // Optional
    ("str", "typing.Optional[str]", true),
    ("str", "typing.Union[str, None]", true),
    ("str", "typing.Optional[int]", false),
    ("typing.Optional[str]", "typing.Optional[int]", false),
    ("str", "typing.Union[int, None]", false),
    ("typing.Optional[str]", "str", false),
    ("typing.Union[str, None]", "str", false),
    // Unions
    ("typing.Union[str, bytes]", "str", true),
    ("typing.Union[str, int]", "int", true),
    ("str", "typing.Union[str, bytes]", true),
    ("typing.Union[str, bytes]", "typing.Union[str, int]", true),
    ("typing.Union[str, bytes]", "int", false),
    ("float", "typing.Union[str, bytes]", false),
    ("typing.Union[str, bytes]", "typing.Union[float, int]", false),
    // Containers
    ("typing.List[str]", "typing.Optional[typing.List[str]]", true),
    ("typing.List[typing.Union[str, int]]", "typing.List[int]", true),
    ("typing.List[int]", "typing.List[typing.Union[str, int]]", true),
    ("typing.List[str]", "typing.Optional[typing.List[typing.Union[str, bytes]]]", true),
    ("typing.List[str]", "typing.List[int]", false),
    ("typing.List[typing.Union[str, int]]", "typing.List[float]", false),
    ("typing.List[str]", "typing.List[typing.Union[int, float]]", false),
    ("str", "typing.Optional[typing.List[typing.Union[str, bytes]]]", false),
    ("typing.List[str]", "typing.Optional[typing.List[typing.Union[int, bytes]]]", false),
    ("typing.Dict[str, int]", "typing.Dict", true),
    ("typing.Dict", "typing.Dict[str, typing.Any]", true),
    ("typing.Dict[str, int]", "typing.Dict[str, typing.Any]", true),
    ("typing.Dict[str, typing.Any]", "typing.Dict[str, int]", true),
    ("typing.Dict[str, int]", "typing.Dict[int, typing.Any]", false),
    ("typing.Dict[int, typing.Any]", "typing.Dict[str, int]", false),
    // Operator unions and builtin generics
    ("str | bytes", "str", true),
    ("int", "str | bytes", false),
    ("list[int]", "list", true),
    ("list", "list[str | int]", true),
    ("list[int]", "list[str | int]", true),
    ("list[int]", "typing.List[typing.Union[str, int]]", true),
    ("typing.List[int]", "list[str | int]", true),
    ("list[int]", "list[str | bytes]", false),
    ("list[int]", "typing.List[str | bytes]", false),
    ("typing.Any", "int | str | None", true),
    ("int | str | None", "typing.Any", true),
];

#[test]
fn test_compatibility_table() {
    for &(source, target, expected) in CASES {
        assert_eq!(
            validate_str(source, target, false),
            Ok(expected),
            "{source} -> {target}"
        );
    }
}

#[test]
fn test_strict_mode_raises_exactly_on_incompatible_rows() {
    for &(source, target, expected) in CASES {
        let result = validate_str(source, target, true);
        if expected {
            assert_eq!(result, Ok(true), "{source} -> {target}");
        } else {
            let err = result.expect_err("incompatible pair must raise");
            assert!(err.is_incompatible(), "{source} -> {target}: {err}");
        }
    }
}

#[test]
fn test_strict_list_against_dict() {
    let source = TypeExpr::subscript("typing.List", vec![TypeExpr::name("str")]);
    let target = TypeExpr::name("typing.Dict");
    let err = types_validate(&source, &target, true).expect_err("list is not a dict");
    match err {
        DuckError::Incompatible { reason, .. } => assert_eq!(reason.rule(), "origin mismatch"),
        other => panic!("expected Incompatible, got {other:?}"),
    }
}
