use super::*;

#[test]
fn backdrop_click_dismisses() {
    assert!(should_dismiss(ModalClick::Backdrop));
}

#[test]
fn close_button_dismisses() {
    assert!(should_dismiss(ModalClick::CloseButton));
}

#[test]
fn panel_click_keeps_overlay_open() {
    assert!(!should_dismiss(ModalClick::Panel));
}

#[test]
fn only_escape_key_dismisses() {
    assert!(should_dismiss_key("Escape"));
    assert!(!should_dismiss_key("Enter"));
    assert!(!should_dismiss_key("Esc "));
}
