//! Detail view for the focused blog post; the body is rendered markdown.

use leptos::prelude::*;

use crate::components::detail_modal::DetailModal;
use crate::content::BlogPost;
use crate::state::view::ViewState;
use crate::util::format::{display_date, image_or_placeholder};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn BlogModal(post: BlogPost) -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let on_close = Callback::new(move |()| view_state.update(|v| v.focus_blog_post(None)));

    let image = image_or_placeholder(&post.image_url).to_owned();
    let published = display_date(post.published_date);
    let body = render_markdown_html(&post.content);
    let tags = post
        .tags
        .iter()
        .map(|tag| view! { <span class="badge badge--outline badge--blue badge--mono">{tag.clone()}</span> })
        .collect_view();
    let featured = post.featured;

    view! {
        <DetailModal on_close=on_close accent="orange">
            <div class="modal__media">
                <img src=image alt=post.title.clone() class="modal__image"/>
                <Show when=move || featured>
                    <span class="badge badge--featured badge--featured-warm modal__featured">"Featured Post"</span>
                </Show>
            </div>
            <div class="modal__body">
                <div class="modal__byline">
                    <span class="badge badge--outline badge--orange badge--mono">{post.category}</span>
                    <span class="modal__meta">{published}</span>
                    <span class="modal__meta">{post.read_time}</span>
                    <span class="modal__meta">"by " {post.author}</span>
                </div>
                <h1 class="modal__title">{post.title}</h1>
                <p class="modal__lead">{post.excerpt}</p>
                <div class="prose" inner_html=body></div>
                <div class="modal__section modal__section--ruled">
                    <h3 class="modal__heading modal__heading--orange">"Tags"</h3>
                    <div class="modal__badges">{tags}</div>
                </div>
            </div>
        </DetailModal>
    }
}
