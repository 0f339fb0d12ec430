//! Latest blog posts as cards. Clicking a card opens the post.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{BlogPost, ContentRepository};
use crate::state::view::ViewState;
use crate::util::format::{CARD_BADGE_LIMIT, badge_overflow, display_date, image_or_placeholder, stagger_delay};

#[component]
pub fn BlogList() -> impl IntoView {
    let content = expect_context::<Arc<ContentRepository>>();
    let posts = content.recent_posts().to_vec();
    let total = content.blog_posts().len();
    let more = (total > posts.len())
        .then(|| view! { <p class="blog-grid__more">{format!("Showing {} of {total} posts", posts.len())}</p> });

    view! {
        <section class="section">
            <div class="section__inner">
                <SectionHeader
                    title="Latest Blog Posts"
                    subtitle="Sharing knowledge and insights from my development journey"
                    accent="orange-pink"
                />
                <div class="blog-grid">
                    {posts
                        .into_iter()
                        .enumerate()
                        .map(|(index, post)| view! { <BlogCard post=post index=index/> })
                        .collect_view()}
                </div>
                {more}
            </div>
        </section>
    }
}

#[component]
fn BlogCard(post: BlogPost, index: usize) -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    let focus_target = post.clone();
    let on_open = move |_| view_state.update(|v| v.focus_blog_post(Some(focus_target.clone())));

    let (shown, _) = badge_overflow(&post.tags, CARD_BADGE_LIMIT);
    let tags = shown
        .iter()
        .map(|tag| view! { <span class="badge badge--outline badge--blue badge--mono">{tag.clone()}</span> })
        .collect_view();
    let image = image_or_placeholder(&post.image_url).to_owned();
    let published = display_date(post.published_date);
    let featured = post.featured;

    view! {
        <article class="card card--blog fade-up" style=stagger_delay(0.0, 0.1, index) on:click=on_open>
            <div class="card__media">
                <img src=image alt=post.title.clone() class="card__image"/>
                <Show when=move || featured>
                    <span class="badge badge--featured badge--featured-warm card__featured">"Featured"</span>
                </Show>
                <span class="badge badge--outline badge--orange badge--mono card__category">{post.category}</span>
            </div>
            <div class="card__body">
                <h3 class="card__title clamp-2">{post.title}</h3>
                <p class="card__text clamp-3">{post.excerpt}</p>
                <div class="card__badges">{tags}</div>
                <div class="card__footer">
                    <span>{published}</span>
                    <span>{post.read_time}</span>
                </div>
            </div>
        </article>
    }
}
