//! Animated background with drifting glyphs.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::floating;

/// Fixed page background. Icons appear only after the page has loaded.
#[component]
pub fn FloatingIcons() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let icons = floating::layout(floating::LAYOUT_SEED);

    view! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop__glow"></div>
            {move || {
                ui.with(|u| u.loaded)
                    .then(|| {
                        icons
                            .iter()
                            .map(|icon| {
                                view! {
                                    <div class="floating-icon" style=icon.style()>
                                        {icon.glyph}
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}
