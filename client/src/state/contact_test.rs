use super::*;

fn filled() -> ContactState {
    let mut state = ContactState::default();
    state.update_field(ContactField::Name, "Ada".to_owned());
    state.update_field(ContactField::Email, "ada@example.com".to_owned());
    state.update_field(ContactField::Message, "Let's build something.".to_owned());
    state
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_trims_values() {
    let form = ContactForm {
        name: "  Ada ".to_owned(),
        email: " ada@example.com ".to_owned(),
        message: "\nHello\n".to_owned(),
    };
    let message = form.validate().unwrap();
    assert_eq!(message.name, "Ada");
    assert_eq!(message.email, "ada@example.com");
    assert_eq!(message.message, "Hello");
}

#[test]
fn validate_reports_first_missing_field() {
    let mut form = ContactForm::default();
    assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Name)));
    form.name = "Ada".to_owned();
    assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Email)));
    form.email = "ada@example.com".to_owned();
    form.message = "   ".to_owned();
    assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Message)));
}

#[test]
fn validate_rejects_malformed_email() {
    for email in ["ada", "@example.com", "ada@", "ada@@example.com", "a da@example.com"] {
        let form = ContactForm { name: "Ada".to_owned(), email: email.to_owned(), message: "Hi".to_owned() };
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "accepted {email:?}");
    }
}

#[test]
fn missing_field_message_names_the_field() {
    assert_eq!(ContactError::MissingField(ContactField::Email).to_string(), "Email address is required");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_is_idle_with_empty_fields() {
    let state = ContactState::default();
    assert_eq!(state.submission(), &SubmissionState::Idle);
    assert!(!state.is_submitting());
    assert_eq!(state.form(), &ContactForm::default());
}

#[test]
fn successful_submission_clears_fields_once() {
    let mut state = filled();
    let pending = state.begin_submit().unwrap();
    assert!(state.is_submitting());
    assert_eq!(state.form().name, "Ada");
    assert_eq!(pending.message.email, "ada@example.com");

    assert_eq!(state.complete(pending.ticket), Completion::Delivered);
    assert_eq!(state.submission(), &SubmissionState::Idle);
    assert_eq!(state.form(), &ContactForm::default());

    // Redeeming the same ticket again changes nothing.
    state.update_field(ContactField::Name, "Grace".to_owned());
    assert_eq!(state.complete(pending.ticket), Completion::Stale);
    assert_eq!(state.form().name, "Grace");
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut state = filled();
    let first = state.begin_submit().unwrap();
    let snapshot = state.clone();
    assert_eq!(state.begin_submit(), Err(ContactError::AlreadySubmitting));
    assert_eq!(state, snapshot);
    assert_eq!(state.complete(first.ticket), Completion::Delivered);
}

#[test]
fn empty_field_leaves_state_unchanged() {
    let mut state = filled();
    state.update_field(ContactField::Message, String::new());
    let before = state.clone();
    assert_eq!(state.begin_submit(), Err(ContactError::MissingField(ContactField::Message)));
    assert_eq!(state, before);
    assert_eq!(state.submission(), &SubmissionState::Idle);
    assert_eq!(state.form().name, "Ada");
}

#[test]
fn failure_keeps_fields_and_clears_flag() {
    let mut state = filled();
    let pending = state.begin_submit().unwrap();
    assert_eq!(state.fail(pending.ticket, "offline".to_owned()), Completion::Failed);
    assert!(!state.is_submitting());
    assert_eq!(state.submission(), &SubmissionState::Failed { reason: "offline".to_owned() });
    assert_eq!(state.form().email, "ada@example.com");

    // Retry from Failed.
    let retry = state.begin_submit().unwrap();
    assert_eq!(state.complete(retry.ticket), Completion::Delivered);
}

#[test]
fn cancel_invalidates_pending_completion() {
    let mut state = filled();
    let pending = state.begin_submit().unwrap();
    assert!(state.cancel());
    assert_eq!(state.submission(), &SubmissionState::Idle);
    assert_eq!(state.complete(pending.ticket), Completion::Stale);
    assert_eq!(state.fail(pending.ticket, "late".to_owned()), Completion::Stale);
    // Fields survive a cancel.
    assert_eq!(state.form().name, "Ada");
}

#[test]
fn cancel_when_idle_reports_nothing_in_flight() {
    let mut state = ContactState::default();
    assert!(!state.cancel());
    assert_eq!(state.submission(), &SubmissionState::Idle);
}

#[test]
fn old_ticket_cannot_complete_newer_submission() {
    let mut state = filled();
    let first = state.begin_submit().unwrap();
    state.cancel();
    let second = state.begin_submit().unwrap();
    assert!(second.ticket.generation() > first.ticket.generation());
    assert_eq!(state.complete(first.ticket), Completion::Stale);
    assert!(state.is_submitting());
    assert_eq!(state.complete(second.ticket), Completion::Delivered);
}

// =============================================================
// Settle
// =============================================================

#[test]
fn settle_success_announces_thank_you() {
    let mut state = filled();
    let pending = state.begin_submit().unwrap();
    let notice = state.settle(pending.ticket, Ok(()));
    assert_eq!(notice, Some((NoticeKind::Success, THANK_YOU_NOTICE.to_owned())));
    assert_eq!(state.form(), &ContactForm::default());
}

#[test]
fn settle_failure_notice_carries_delivery_error() {
    let mut state = filled();
    let pending = state.begin_submit().unwrap();
    let (kind, text) = state.settle(pending.ticket, Err(ContactError::Delivery("offline".to_owned()))).unwrap();
    assert_eq!(kind, NoticeKind::Error);
    assert!(text.contains("delivery failed: offline"), "notice was {text:?}");
    assert_eq!(state.submission(), &SubmissionState::Failed { reason: "delivery failed: offline".to_owned() });
    assert_eq!(state.form().name, "Ada");
}

#[test]
fn settle_stale_ticket_announces_nothing() {
    let mut state = filled();
    let pending = state.begin_submit().unwrap();
    state.cancel();
    assert_eq!(state.settle(pending.ticket, Ok(())), None);
    assert_eq!(state.settle(pending.ticket, Err(ContactError::Delivery("late".to_owned()))), None);
    assert_eq!(state.form().message, "Let's build something.");
}

// =============================================================
// Delivery
// =============================================================

#[test]
fn simulated_delivery_succeeds() {
    let message = filled().form().validate().unwrap();
    let outcome = futures::executor::block_on(deliver(message, Duration::from_millis(0)));
    assert_eq!(outcome, Ok(()));
}

#[test]
fn failure_notice_includes_reason() {
    assert!(failure_notice("offline").contains("offline"));
    assert_ne!(failure_notice("offline"), THANK_YOU_NOTICE);
}
