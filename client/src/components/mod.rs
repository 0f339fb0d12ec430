//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections and read/write shared state from
//! the Leptos context providers installed by `App`.

pub mod blog_list;
pub mod blog_modal;
pub mod contact_form;
pub mod detail_modal;
pub mod floating_icons;
pub mod footer;
pub mod hero;
pub mod notice_toast;
pub mod project_gallery;
pub mod project_modal;
pub mod section_header;
pub mod skills_grid;
pub mod testimonials;
