//! Focused items shown in the detail overlays.
//!
//! Project and blog-post focus are independent slots: focusing one never
//! touches the other.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use crate::content::{BlogPost, Project};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusState {
    project: Option<Project>,
    blog_post: Option<BlogPost>,
}

impl FocusState {
    #[must_use]
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    #[must_use]
    pub fn blog_post(&self) -> Option<&BlogPost> {
        self.blog_post.as_ref()
    }

    /// Set or clear (`None`) the focused project.
    pub fn focus_project(&mut self, project: Option<Project>) {
        log::debug!("focus project: {:?}", project.as_ref().map(|p| p.id.as_str()));
        self.project = project;
    }

    /// Set or clear (`None`) the focused blog post.
    pub fn focus_blog_post(&mut self, post: Option<BlogPost>) {
        log::debug!("focus blog post: {:?}", post.as_ref().map(|p| p.id.as_str()));
        self.blog_post = post;
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.project.is_some() || self.blog_post.is_some()
    }
}
