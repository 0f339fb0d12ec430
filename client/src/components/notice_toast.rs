//! Transient notice shown after a contact submission settles.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// Show a notice and schedule its auto-dismiss. A newer notice replaces the
/// current one; the older timer then finds a stale seq and does nothing.
pub fn announce(ui: RwSignal<UiState>, kind: NoticeKind, text: impl Into<String>) {
    let Some(seq) = ui.try_update(|u| u.show_notice(kind, text)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::ui::NOTICE_TIMEOUT_MS)).await;
        let _ = ui.try_update(|u| u.dismiss_notice(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.with(|u| u.notice.clone()).map(|notice| {
            let seq = notice.seq;
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="status" aria-live="polite">
                    <span class="notice__text">{notice.text}</span>
                    <button
                        class="notice__close"
                        title="Dismiss"
                        on:click=move |_| {
                            ui.update(|u| {
                                u.dismiss_notice(seq);
                            });
                        }
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
