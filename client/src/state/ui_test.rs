use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_currency() {
    let state = UiState::default();
    assert_eq!(state.active(), ToolId::Currency);
    assert_eq!(state.notice, None);
}

#[test]
fn select_switches_tab() {
    let mut state = UiState::default();
    state.select(ToolId::Wheel);
    assert_eq!(state.active(), ToolId::Wheel);
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notify_sets_notice_with_increasing_seq() {
    let mut state = UiState::default();
    let a = state.notify(NoticeKind::Success, "one");
    let b = state.notify(NoticeKind::Error, "two");
    assert!(b > a);
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.text, "two");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn dismiss_only_clears_matching_notice() {
    let mut state = UiState::default();
    let old = state.notify(NoticeKind::Success, "old");
    let new = state.notify(NoticeKind::Success, "new");
    state.dismiss(old);
    assert!(state.notice.is_some());
    state.dismiss(new);
    assert_eq!(state.notice, None);
}
