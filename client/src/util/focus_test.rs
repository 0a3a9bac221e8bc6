use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
}

#[test]
fn other_keys_do_not_dismiss() {
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("ArrowLeft"));
    assert!(!is_dismiss_key(""));
}
