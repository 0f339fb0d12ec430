//! Hero banner with name, role, tech badges and the call-to-action.

use leptos::prelude::*;

use crate::content::catalog;
use crate::util::{dom, format::stagger_delay};

#[component]
pub fn Hero() -> impl IntoView {
    let on_explore = move |_| dom::scroll_to_section(dom::PROJECTS_ANCHOR);

    view! {
        <section class="hero">
            <div class="hero__inner">
                <div class="hero__intro fade-up" style="animation-delay: 0.2s">
                    <h1 class="hero__title gradient-text gradient-text--hero">{catalog::HANDLE}</h1>
                    <p class="hero__name">{catalog::FULL_NAME}</p>
                    <p class="hero__role">{catalog::ROLE}</p>
                </div>

                <p class="hero__blurb fade-up" style="animation-delay: 0.6s">{catalog::INTRO}</p>

                <div class="hero__badges">
                    {catalog::HERO_TECH
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <span class="badge badge--outline badge--purple pop-in" style=stagger_delay(1.2, 0.1, i)>
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <button class="btn btn--gradient hero__cta fade-up" style="animation-delay: 1.4s" on:click=on_explore>
                    "Explore My Work"
                    <span class="hero__chevron" aria-hidden="true">"⌄"</span>
                </button>
            </div>
        </section>
    }
}
