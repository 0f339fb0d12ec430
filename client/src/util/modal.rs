//! Dismissal rules for the detail overlays.
//!
//! The overlay is a backdrop wrapping a panel. Clicks inside the panel stop
//! propagating at the panel boundary, so only the close button, a backdrop
//! click or Escape close the overlay.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Where a click inside an open overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    Panel,
    CloseButton,
}

#[must_use]
pub fn should_dismiss(click: ModalClick) -> bool {
    match click {
        ModalClick::Backdrop | ModalClick::CloseButton => true,
        ModalClick::Panel => false,
    }
}

#[must_use]
pub fn should_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
