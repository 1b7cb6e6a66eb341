use super::*;

fn case(source: &str, target: &str, expected: Option<bool>) -> BatchCase {
    BatchCase {
        source: source.to_string(),
        target: target.to_string(),
        expected,
    }
}

#[test]
fn test_parse_cases_with_optional_expected() {
    let cases = parse_cases(
        r#"[
            {"source": "str", "target": "Optional[str]", "expected": true},
            {"source": "int", "target": "str"}
        ]"#,
    )
    .expect("valid batch");
    assert_eq!(
        cases,
        vec![
            case("str", "Optional[str]", Some(true)),
            case("int", "str", None),
        ]
    );
}

#[test]
fn test_parse_cases_rejects_non_array() {
    assert!(parse_cases(r#"{"source": "str", "target": "str"}"#).is_err());
    assert!(parse_cases(r#"[{"source": "str"}]"#).is_err());
}

#[test]
fn test_run_batch_keeps_order_and_classifies() {
    let cases = vec![
        case("str", "Optional[str]", Some(true)),
        case("Optional[str]", "str", Some(true)),
        case("List[", "list", None),
        case("Dict[str, int]", "Dict[str, Any]", None),
    ];
    let outcomes = run_batch(&cases);
    assert_eq!(outcomes.len(), 4);
    for (i, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.index, i);
        assert_eq!(outcome.source, cases[i].source);
    }

    assert_eq!(outcomes[0].compatible, Some(true));
    assert!(!outcomes[0].is_unexpected());

    assert_eq!(outcomes[1].compatible, Some(false));
    assert!(outcomes[1].is_unexpected());

    assert_eq!(outcomes[2].compatible, None);
    assert!(outcomes[2].is_error());
    assert!(!outcomes[2].is_unexpected());

    assert_eq!(outcomes[3].compatible, Some(true));

    assert_eq!(
        BatchSummary::from_outcomes(&outcomes),
        BatchSummary {
            total: 4,
            compatible: 2,
            incompatible: 1,
            unexpected: 1,
            errors: 1,
        }
    );
}

#[test]
fn test_parallel_batch_matches_sequential_answers() {
    let shapes = ["str", "int", "List[int]", "List[int | str]", "Optional[Dict[str, Any]]", "dict"];
    let mut cases = Vec::new();
    for source in shapes {
        for target in shapes {
            cases.push(case(source, target, None));
        }
    }
    let outcomes = run_batch(&cases);
    for (case, outcome) in cases.iter().zip(&outcomes) {
        let sequential = typeduck::validate_str(&case.source, &case.target, false).ok();
        assert_eq!(outcome.compatible, sequential, "{} -> {}", case.source, case.target);
    }
}

#[test]
fn test_load_cases_reports_missing_file() {
    let err = load_cases(Path::new("/nonexistent/typeduck-cases.json")).expect_err("missing file");
    assert!(format!("{err:#}").contains("failed to read"));
}
