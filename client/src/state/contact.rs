//! Contact form values and the submission lifecycle.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Idle` on success, `Submitting -> Failed` when
//! delivery reports an error. Each submission gets a ticket carrying a
//! generation number; completions are only applied when the ticket matches
//! the in-flight generation, so `cancel` (component teardown) or a newer
//! submission turns a late completion into a no-op.
//!
//! TRADE-OFFS
//! ==========
//! Delivery is simulated with a timer. There is no transport to fail, but the
//! `Failed` state keeps the typed fields so a real transport can slot in
//! behind [`deliver`] without changing callers.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use super::ui::NoticeKind;

/// Simulated send time.
pub const SIMULATED_DELAY_MS: u64 = 2000;

pub const THANK_YOU_NOTICE: &str = "Thank you for your message! I'll get back to you soon.";

/// Notice shown after a failed delivery. Fields are kept for a retry.
#[must_use]
pub fn failure_notice(reason: &str) -> String {
    format!("Your message could not be sent ({reason}). Please try again.")
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Email address",
            Self::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadySubmitting,
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check required fields and produce the trimmed message to deliver.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingField`] for the first blank field (name, email,
    /// message order), [`ContactError::InvalidEmail`] when the address has no
    /// local part or domain around a single `@`.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = required(self, ContactField::Name)?;
        let email = required(self, ContactField::Email)?;
        let message = required(self, ContactField::Message)?;
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
    }
}

fn required(form: &ContactForm, field: ContactField) -> Result<&str, ContactError> {
    let value = form.get(field).trim();
    if value.is_empty() { Err(ContactError::MissingField(field)) } else { Ok(value) }
}

fn looks_like_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !raw.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validated, trimmed message handed to delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

// =============================================================================
// SUBMISSION LIFECYCLE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting { generation: u64 },
    Failed { reason: String },
}

/// Proof of a started submission; redeemed by `complete` or `fail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

impl SubmissionTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub message: ContactMessage,
}

/// Result of redeeming a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Delivered,
    Failed,
    /// The ticket no longer matches the in-flight submission; nothing changed.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    form: ContactForm,
    submission: SubmissionState,
    generation: u64,
}

impl ContactState {
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting { .. })
    }

    pub fn update_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    /// Start a submission.
    ///
    /// # Errors
    ///
    /// [`ContactError::AlreadySubmitting`] while a send is in flight, or a
    /// validation error from [`ContactForm::validate`]. State is unchanged on
    /// error.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        let message = self.form.validate()?;
        self.generation += 1;
        self.submission = SubmissionState::Submitting { generation: self.generation };
        log::debug!("contact submission {} started", self.generation);
        Ok(PendingSubmission { ticket: SubmissionTicket { generation: self.generation }, message })
    }

    /// Finish a successful delivery: back to `Idle` with all fields cleared.
    pub fn complete(&mut self, ticket: SubmissionTicket) -> Completion {
        if !self.is_current(ticket) {
            log::debug!("ignoring stale contact completion {}", ticket.generation);
            return Completion::Stale;
        }
        self.form.clear();
        self.submission = SubmissionState::Idle;
        log::debug!("contact submission {} delivered", ticket.generation);
        Completion::Delivered
    }

    /// Record a failed delivery. Field values are kept.
    pub fn fail(&mut self, ticket: SubmissionTicket, reason: String) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        log::warn!("contact submission {} failed: {reason}", ticket.generation);
        self.submission = SubmissionState::Failed { reason };
        Completion::Failed
    }

    /// Apply a delivery result and return the notice to announce. `None`
    /// when the ticket is stale. A failure notice carries the delivery
    /// error's own text.
    pub fn settle(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<(), ContactError>,
    ) -> Option<(NoticeKind, String)> {
        match outcome {
            Ok(()) => (self.complete(ticket) == Completion::Delivered)
                .then(|| (NoticeKind::Success, THANK_YOU_NOTICE.to_owned())),
            Err(e) => {
                let reason = e.to_string();
                let notice = failure_notice(&reason);
                (self.fail(ticket, reason) == Completion::Failed).then_some((NoticeKind::Error, notice))
            }
        }
    }

    /// Invalidate any pending completion. Returns `true` if a send was in
    /// flight.
    pub fn cancel(&mut self) -> bool {
        let was_submitting = self.is_submitting();
        self.generation += 1;
        if was_submitting {
            log::debug!("contact submission cancelled");
            self.submission = SubmissionState::Idle;
        }
        was_submitting
    }

    fn is_current(&self, ticket: SubmissionTicket) -> bool {
        matches!(self.submission, SubmissionState::Submitting { generation } if generation == ticket.generation)
    }
}

// =============================================================================
// DELIVERY
// =============================================================================

/// Send `message`. Currently a timer standing in for a real transport.
///
/// # Errors
///
/// Never fails today; a real transport reports [`ContactError::Delivery`].
#[allow(clippy::unused_async, clippy::unnecessary_wraps)]
pub async fn deliver(message: ContactMessage, delay: Duration) -> Result<(), ContactError> {
    log::info!("simulating delivery of message from {} <{}>", message.name, message.email);
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = delay;
    Ok(())
}
