use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert_eq!(state.connection, ConnectionStatus::Connecting);
    assert!(state.notice.is_none());
}

#[test]
fn notice_constructors_set_kind() {
    assert_eq!(Notice::info("working").kind, NoticeKind::Info);
    assert_eq!(Notice::error("broken").kind, NoticeKind::Error);
    assert_eq!(Notice::error("broken").text, "broken");
}
