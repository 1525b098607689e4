use super::*;

// =============================================================
// NoticeState
// =============================================================

#[test]
fn notice_state_default_is_empty() {
    assert!(NoticeState::default().notices.is_empty());
}

#[test]
fn push_error_assigns_monotonic_ids() {
    let mut state = NoticeState::default();
    let a = state.push_error("first");
    let b = state.push_error("second");
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].text, "first");
}

#[test]
fn dismiss_removes_only_the_given_id() {
    let mut state = NoticeState::default();
    let a = state.push_error("first");
    let b = state.push_error("second");
    state.dismiss(a);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = NoticeState::default();
    state.push_error("only");
    state.dismiss(999);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push_error("first");
    state.dismiss(a);
    let b = state.push_error("second");
    assert!(b > a);
}
