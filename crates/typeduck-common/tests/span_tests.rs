use super::*;

#[test]
fn test_span_len_and_empty() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::at(5).is_empty());
    assert_eq!(Span::at(5).len(), 0);
}

#[test]
fn test_span_merge_covers_both() {
    let merged = Span::new(4, 6).merge(Span::new(1, 3));
    assert_eq!(merged, Span::new(1, 6));
}

#[test]
fn test_span_slice() {
    let text = "List[int]";
    assert_eq!(Span::new(0, 4).slice(text), Some("List"));
    assert_eq!(Span::new(5, 8).slice(text), Some("int"));
    assert_eq!(Span::new(5, 42).slice(text), None);
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(2, 9).to_string(), "2..9");
}
