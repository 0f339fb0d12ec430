//! Root-owned view state for the portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides a single `RwSignal<ViewState>` through context. Components
//! read snapshots through the accessors and route every change through the
//! mutators below, so the invariants of the gallery filter, the focus slots
//! and the submission lifecycle live in one place.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::content::{BlogPost, Project};

use super::contact::{
    Completion, ContactError, ContactField, ContactForm, ContactState, PendingSubmission, SubmissionState,
    SubmissionTicket,
};
use super::focus::FocusState;
use super::gallery::{CategoryFilter, visible_projects};
use super::ui::NoticeKind;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    category: CategoryFilter,
    focus: FocusState,
    contact: ContactState,
}

impl ViewState {
    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    #[must_use]
    pub fn focused_project(&self) -> Option<&Project> {
        self.focus.project()
    }

    #[must_use]
    pub fn focused_blog_post(&self) -> Option<&BlogPost> {
        self.focus.blog_post()
    }

    /// Whether any detail overlay is showing; the page locks scrolling.
    #[must_use]
    pub fn any_detail_open(&self) -> bool {
        self.focus.any_open()
    }

    #[must_use]
    pub fn contact_form(&self) -> &ContactForm {
        self.contact.form()
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionState {
        self.contact.submission()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.contact.is_submitting()
    }

    /// Projects visible under the active filter.
    #[must_use]
    pub fn visible_projects<'a>(&self, all: &'a [Project]) -> Vec<&'a Project> {
        visible_projects(all, self.category)
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.category != category {
            log::debug!("project filter: {}", category.id());
        }
        self.category = category;
    }

    pub fn focus_project(&mut self, project: Option<Project>) {
        self.focus.focus_project(project);
    }

    pub fn focus_blog_post(&mut self, post: Option<BlogPost>) {
        self.focus.focus_blog_post(post);
    }

    pub fn update_contact_field(&mut self, field: ContactField, value: String) {
        self.contact.update_field(field, value);
    }

    /// # Errors
    ///
    /// See [`ContactState::begin_submit`].
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, ContactError> {
        self.contact.begin_submit()
    }

    pub fn complete_submit(&mut self, ticket: SubmissionTicket) -> Completion {
        self.contact.complete(ticket)
    }

    pub fn fail_submit(&mut self, ticket: SubmissionTicket, reason: String) -> Completion {
        self.contact.fail(ticket, reason)
    }

    pub fn settle_submit(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), ContactError>,
    ) -> Option<(NoticeKind, String)> {
        self.contact.settle(ticket, outcome)
    }

    pub fn cancel_submit(&mut self) -> bool {
        self.contact.cancel()
    }
}
