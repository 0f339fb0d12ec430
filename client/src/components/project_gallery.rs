//! Filterable project gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the project list from the content repository and the active filter
//! from `ViewState`; the visible list is a memo re-derived whenever the
//! filter changes. Clicking a card focuses it, which opens the detail modal.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{ContentRepository, Project};
use crate::state::gallery::CategoryFilter;
use crate::state::view::ViewState;
use crate::util::dom::PROJECTS_ANCHOR;
use crate::util::format::{CARD_BADGE_LIMIT, badge_overflow, image_or_placeholder, overflow_label, stagger_delay};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let content = expect_context::<Arc<ContentRepository>>();
    let view_state = expect_context::<RwSignal<ViewState>>();

    let visible = Memo::new(move |_| {
        view_state.with(|v| v.visible_projects(content.projects()).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <section id=PROJECTS_ANCHOR class="section">
            <div class="section__inner">
                <SectionHeader
                    title="My Projects"
                    subtitle="A showcase of my work across different technologies and platforms"
                    accent="blue-purple"
                />

                <div class="filter-bar fade-up" style="animation-delay: 0.2s">
                    {CategoryFilter::OPTIONS
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    class="btn filter-bar__button"
                                    class:filter-bar__button--active=move || view_state.with(|v| v.category() == filter)
                                    data-category=filter.id()
                                    on:click=move |_| view_state.update(|v| v.set_category(filter))
                                >
                                    <span class="filter-bar__icon" aria-hidden="true">{filter.icon()}</span>
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="project-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| view! { <ProjectCard project=project index=index/> })
                            .collect_view()
                    }}
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="project-grid__empty">"No projects in this category yet."</p>
                </Show>
            </div>
        </section>
    }
}

/// Card for one project. Link buttons stop propagation so they open the
/// link without also opening the detail modal.
#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    let focus_target = project.clone();
    let on_open = move |_| view_state.update(|v| v.focus_project(Some(focus_target.clone())));

    let (shown, hidden) = badge_overflow(&project.tools_used, CARD_BADGE_LIMIT);
    let tool_badges = shown
        .iter()
        .map(|tool| view! { <span class="badge badge--outline badge--blue badge--mono">{tool.clone()}</span> })
        .collect_view();
    let more = overflow_label(hidden)
        .map(|label| view! { <span class="badge badge--outline badge--muted badge--mono">{label}</span> });

    let code_link = project.github_repo.url().map(|url| {
        view! {
            <a
                class="btn btn--small btn--outline-purple"
                href=url.to_owned()
                target="_blank"
                rel="noopener noreferrer"
                on:click=move |ev| ev.stop_propagation()
            >
                "Code"
            </a>
        }
    });
    let live_link = project.site_url.url().map(|url| {
        view! {
            <a
                class="btn btn--small btn--outline-blue"
                href=url.to_owned()
                target="_blank"
                rel="noopener noreferrer"
                on:click=move |ev| ev.stop_propagation()
            >
                "Live"
            </a>
        }
    });

    let image = image_or_placeholder(&project.image_url).to_owned();
    let featured = project.featured;

    view! {
        <article class="card card--project fade-up" style=stagger_delay(0.0, 0.1, index) on:click=on_open>
            <div class="card__media">
                <img src=image alt=project.title.clone() class="card__image"/>
                <div class="card__shade"></div>
                <Show when=move || featured>
                    <span class="badge badge--featured card__featured">"Featured"</span>
                </Show>
            </div>
            <div class="card__body">
                <h3 class="card__title">{project.title}</h3>
                <p class="card__text clamp-3">{project.description}</p>
                <div class="card__badges">{tool_badges} {more}</div>
                <div class="card__actions">{code_link} {live_link}</div>
            </div>
        </article>
    }
}
