use super::*;

#[test]
fn test_guard_counts_depth() {
    let mut guard = RecursionGuard::new(3, 100);
    assert!(guard.enter().is_entered());
    assert!(guard.enter().is_entered());
    assert_eq!(guard.depth(), 2);
    guard.leave();
    assert_eq!(guard.depth(), 1);
    assert_eq!(guard.max_reached(), 2);
    guard.leave();
    assert_eq!(guard.depth(), 0);
    assert!(!guard.is_exceeded());
}

#[test]
fn test_guard_refuses_past_max_depth() {
    let mut guard = RecursionGuard::new(2, 100);
    assert!(guard.enter().is_entered());
    assert!(guard.enter().is_entered());
    assert_eq!(guard.enter(), RecursionResult::DepthExceeded);
    assert!(guard.is_exceeded());
    assert_eq!(guard.depth(), 2);
}

#[test]
fn test_guard_refuses_past_iteration_budget() {
    let mut guard = RecursionGuard::new(10, 2);
    assert!(guard.enter().is_entered());
    guard.leave();
    assert!(guard.enter().is_entered());
    guard.leave();
    assert_eq!(guard.enter(), RecursionResult::IterationExceeded);
    assert_eq!(guard.max_iterations(), 2);
    assert_eq!(guard.depth(), 0);
}

#[test]
fn test_scope_leaves_on_success() {
    let mut guard = RecursionGuard::with_profile(RecursionProfile::Custom {
        max_depth: 1,
        max_iterations: 10,
    });
    let inner = guard.scope(|g| g.scope(|_| ()).is_err());
    assert_eq!(inner, Ok(true));
    assert_eq!(guard.depth(), 0);
}

#[test]
fn test_profiles_follow_common_limits() {
    use typeduck_common::limits::{MAX_DESCRIPTOR_DEPTH, MAX_PARSE_DEPTH};
    assert_eq!(RecursionProfile::Descriptor.max_depth(), MAX_DESCRIPTOR_DEPTH);
    assert_eq!(RecursionProfile::Parse.max_depth(), MAX_PARSE_DEPTH);
}
