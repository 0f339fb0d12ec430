//! Overlay shell shared by the project and blog-post detail views.
//!
//! The backdrop closes the overlay; the panel stops click propagation so
//! interacting with its content never reaches the backdrop.

use leptos::prelude::*;

use crate::util::modal::{ModalClick, should_dismiss, should_dismiss_key};

/// Backdrop + panel with a close button. `accent` picks the border color.
#[component]
pub fn DetailModal(on_close: Callback<()>, accent: &'static str, children: Children) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    let dismiss = move |click: ModalClick| {
        if should_dismiss(click) {
            on_close.run(());
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if should_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    // Move keyboard focus into the panel so Escape works without a click.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(panel) = panel_ref.get() {
            let _ = panel.focus();
        }
    });

    view! {
        <div class="modal__backdrop" on:click=move |_| dismiss(ModalClick::Backdrop)>
            <div
                class=format!("modal__panel modal__panel--{accent}")
                role="dialog"
                aria-modal="true"
                tabindex="0"
                node_ref=panel_ref
                on:click=move |ev| {
                    ev.stop_propagation();
                    dismiss(ModalClick::Panel);
                }
                on:keydown=on_keydown
            >
                <button
                    class="modal__close"
                    title="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        dismiss(ModalClick::CloseButton);
                    }
                >
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}
