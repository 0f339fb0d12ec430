//! Client testimonials with star ratings.

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::catalog::TESTIMONIALS;
use crate::util::format::{image_or_placeholder, stagger_delay, star_count};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section section--tinted">
            <div class="section__inner">
                <SectionHeader
                    title="Client Testimonials"
                    subtitle="What clients say about working with me"
                    accent="yellow-orange"
                />
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            let slide = if i % 2 == 0 { "slide-in-left" } else { "slide-in-right" };
                            view! {
                                <figure class=format!("card card--testimonial {slide}") style=stagger_delay(0.0, 0.2, i)>
                                    <div class="testimonial__rating">
                                        <span class="testimonial__quote" aria-hidden="true">"❝"</span>
                                        {(0..star_count(t.rating))
                                            .map(|_| view! { <span class="testimonial__star">"★"</span> })
                                            .collect_view()}
                                    </div>
                                    <blockquote class="testimonial__content">{format!("\"{}\"", t.content)}</blockquote>
                                    <figcaption class="testimonial__author">
                                        <img src=image_or_placeholder(t.avatar) alt=t.name class="testimonial__avatar"/>
                                        <div>
                                            <h4 class="testimonial__name">{t.name}</h4>
                                            <p class="testimonial__role">{format!("{} at {}", t.role, t.company)}</p>
                                        </div>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
