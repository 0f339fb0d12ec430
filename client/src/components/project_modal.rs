//! Detail view for the focused project.

use leptos::prelude::*;

use crate::components::detail_modal::DetailModal;
use crate::content::Project;
use crate::state::view::ViewState;
use crate::util::format::{display_date, image_or_placeholder};

#[component]
pub fn ProjectModal(project: Project) -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let on_close = Callback::new(move |()| view_state.update(|v| v.focus_project(None)));

    let image = image_or_placeholder(&project.image_url).to_owned();
    let completed = display_date(project.completion_date);
    let category = project.category.key();
    let tools = project
        .tools_used
        .iter()
        .map(|tool| view! { <span class="badge badge--outline badge--blue badge--mono">{tool.clone()}</span> })
        .collect_view();
    let code_link = project.github_repo.url().map(|url| {
        view! {
            <a class="btn btn--gradient" href=url.to_owned() target="_blank" rel="noopener noreferrer">
                "View Code"
            </a>
        }
    });
    let live_link = project.site_url.url().map(|url| {
        view! {
            <a class="btn btn--outline-blue" href=url.to_owned() target="_blank" rel="noopener noreferrer">
                "Live Demo"
            </a>
        }
    });
    let private_note = project
        .github_repo
        .is_private()
        .then(|| view! { <p class="modal__meta modal__meta--private">"Source code is private"</p> });
    let featured = project.featured;

    view! {
        <DetailModal on_close=on_close accent="purple">
            <div class="modal__media">
                <img src=image alt=project.title.clone() class="modal__image"/>
                <Show when=move || featured>
                    <span class="badge badge--featured modal__featured">"Featured Project"</span>
                </Show>
            </div>
            <div class="modal__body">
                <h2 class="modal__title">{project.title}</h2>
                <p class="modal__lead">{project.description}</p>

                <div class="modal__columns">
                    <div>
                        <h3 class="modal__heading">"Technologies Used"</h3>
                        <div class="modal__badges">{tools}</div>
                    </div>
                    <div>
                        <h3 class="modal__heading">"Project Details"</h3>
                        <p class="modal__meta">"Completed: " {completed}</p>
                        <p class="modal__meta">"Category: " {category}</p>
                    </div>
                </div>

                <div class="modal__section">
                    <h3 class="modal__heading">"Challenges & Solutions"</h3>
                    <p class="modal__text">{project.challenges}</p>
                </div>

                <div class="modal__actions">{code_link} {live_link}</div>
                {private_note}
            </div>
        </DetailModal>
    }
}
