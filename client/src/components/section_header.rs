//! Heading block shared by every page section.

use leptos::prelude::*;

/// Gradient title with a subtitle underneath.
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="section-header fade-up">
            <h2 class=format!("section-header__title gradient-text gradient-text--{accent}")>{title}</h2>
            <p class="section-header__subtitle">{subtitle}</p>
        </div>
    }
}
