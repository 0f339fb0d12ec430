//! The single-page portfolio.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes every section in page order and mounts the detail overlays for
//! whichever project or blog post is focused in `ViewState`. Both overlays
//! may be open at once; each closes only its own slot.

use leptos::prelude::*;

use crate::components::{
    blog_list::BlogList, blog_modal::BlogModal, contact_form::ContactSection, floating_icons::FloatingIcons,
    footer::Footer, hero::Hero, notice_toast::NoticeToast, project_gallery::ProjectGallery,
    project_modal::ProjectModal, skills_grid::SkillsGrid, testimonials::Testimonials,
};
use crate::state::ui::UiState;
use crate::state::view::ViewState;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Runs after mount on the client; gates the floating background.
    Effect::new(move || {
        if !ui.with_untracked(|u| u.loaded) {
            ui.update(|u| u.loaded = true);
        }
    });

    let project_modal = move || {
        view_state
            .with(|v| v.focused_project().cloned())
            .map(|project| view! { <ProjectModal project=project/> })
    };
    let blog_modal = move || {
        view_state
            .with(|v| v.focused_blog_post().cloned())
            .map(|post| view! { <BlogModal post=post/> })
    };

    view! {
        <div class="page" class:page--locked=move || view_state.with(ViewState::any_detail_open)>
            <FloatingIcons/>
            <main class="page__content">
                <Hero/>
                <ProjectGallery/>
                <SkillsGrid/>
                <BlogList/>
                <Testimonials/>
                <ContactSection/>
                <Footer/>
            </main>
            {project_modal}
            {blog_modal}
            <NoticeToast/>
        </div>
    }
}
