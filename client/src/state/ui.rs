//! Local UI chrome state (entrance animations, transient notices).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of [`super::view::ViewState`] so the
//! filter/focus/submission engine stays free of rendering details.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a notice stays on screen before it is dismissed automatically.
pub const NOTICE_TIMEOUT_MS: u64 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

/// A toast message. `seq` identifies it for delayed dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Set once the page has mounted in the browser; gates the floating
    /// background icons so SSR output stays static.
    pub loaded: bool,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl UiState {
    /// Replace the current notice. Returns its sequence number.
    pub fn show_notice(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { seq: self.notice_seq, kind, text: text.into() });
        self.notice_seq
    }

    /// Dismiss the notice if it is still the one identified by `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) -> bool {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
            true
        } else {
            false
        }
    }
}
