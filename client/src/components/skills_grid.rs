//! Skills section: one card per skill with a proficiency bar.

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::catalog::SKILLS;
use crate::util::format::{skill_width, stagger_delay};

#[component]
pub fn SkillsGrid() -> impl IntoView {
    view! {
        <section class="section section--tinted">
            <div class="section__inner">
                <SectionHeader
                    title="Skills & Expertise"
                    subtitle="Technologies and tools I use to bring ideas to life"
                    accent="green-blue"
                />
                <div class="skill-grid">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <div class="skill-card slide-in-left" style=stagger_delay(0.0, 0.1, i)>
                                    <div class="skill-card__header">
                                        <span class="skill-card__icon" aria-hidden="true">{skill.icon.glyph()}</span>
                                        <h3 class="skill-card__name">{skill.name}</h3>
                                    </div>
                                    <div class="skill-card__meta">
                                        <span>{skill.category}</span>
                                        <span>{skill_width(skill.level)}</span>
                                    </div>
                                    <div class="skill-card__track">
                                        <div
                                            class="skill-card__bar grow-width"
                                            style=format!("width: {}; {}", skill_width(skill.level), stagger_delay(0.5, 0.1, i))
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
