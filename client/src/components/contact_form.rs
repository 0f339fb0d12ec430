//! Contact section: the message form and a direct email link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field values and the submission lifecycle live in `ViewState`. Submitting
//! takes a ticket from `ViewState::begin_submit`, runs delivery in a local
//! task and redeems the ticket when it settles. Unmounting cancels the
//! in-flight submission so a late completion is dropped.

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::catalog;
use crate::state::contact::{ContactField, PendingSubmission, SubmissionState};
use crate::state::ui::UiState;
use crate::state::view::ViewState;

#[component]
pub fn ContactSection() -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form_error = RwSignal::new(None::<String>);

    let submitting = move || view_state.with(ViewState::is_submitting);
    let field_value = move |field: ContactField| view_state.with(|v| v.contact_form().get(field).to_owned());
    let on_input = move |field: ContactField, ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        view_state.update(|v| v.update_contact_field(field, value));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match view_state.try_update(ViewState::begin_submit) {
            Some(Ok(pending)) => {
                form_error.set(None);
                spawn_delivery(view_state, ui, pending);
            }
            Some(Err(e)) => form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    on_cleanup(move || {
        let _ = view_state.try_update(ViewState::cancel_submit);
    });

    let failure = move || {
        view_state.with(|v| match v.submission() {
            SubmissionState::Failed { reason } => Some(reason.clone()),
            _ => None,
        })
    };

    view! {
        <section class="section">
            <div class="section__inner section__inner--narrow">
                <SectionHeader
                    title="Let's Work Together"
                    subtitle="Have a project in mind? Let's discuss how we can bring your ideas to life"
                    accent="pink-purple"
                />
                <div class="contact-grid">
                    <div class="card card--contact fade-up">
                        <h3 class="card__heading">"Send me a message"</h3>
                        <form class="contact-form" on:submit=on_submit>
                            <input
                                class="input"
                                type="text"
                                placeholder=ContactField::Name.label()
                                required=true
                                prop:value=move || field_value(ContactField::Name)
                                on:input=move |ev| on_input(ContactField::Name, ev)
                            />
                            <input
                                class="input"
                                type="email"
                                placeholder=ContactField::Email.label()
                                required=true
                                prop:value=move || field_value(ContactField::Email)
                                on:input=move |ev| on_input(ContactField::Email, ev)
                            />
                            <textarea
                                class="input input--area"
                                rows="5"
                                placeholder="Your message"
                                required=true
                                prop:value=move || field_value(ContactField::Message)
                                on:input=move |ev| on_input(ContactField::Message, ev)
                            ></textarea>
                            {move || form_error.get().map(|msg| view! { <p class="contact-form__error">{msg}</p> })}
                            {move || {
                                failure()
                                    .map(|reason| {
                                        view! { <p class="contact-form__error">{format!("Last attempt failed: {reason}")}</p> }
                                    })
                            }}
                            <button class="btn btn--gradient btn--block" type="submit" disabled=submitting>
                                {move || if submitting() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>

                    <div class="contact-aside fade-up" style="animation-delay: 0.2s">
                        <h3 class="card__heading">"Get in touch"</h3>
                        <p class="contact-aside__text">
                            "I'm always interested in new opportunities and exciting projects. Whether you need a \
                             web application, mobile app, or full-stack solution, let's talk."
                        </p>
                        <a class="contact-aside__email" href=format!("mailto:{}", catalog::CONTACT_EMAIL)>
                            <span aria-hidden="true">"✉"</span>
                            {catalog::CONTACT_EMAIL}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Run delivery for `pending` and apply the outcome. Stale outcomes (the
/// section was torn down or a newer submission started) are dropped.
fn spawn_delivery(view_state: RwSignal<ViewState>, ui: RwSignal<UiState>, pending: PendingSubmission) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::components::notice_toast::announce;
        use crate::state::contact::{SIMULATED_DELAY_MS, deliver};

        let PendingSubmission { ticket, message } = pending;
        let outcome = deliver(message, std::time::Duration::from_millis(SIMULATED_DELAY_MS)).await;
        if let Some((kind, text)) = view_state.try_update(|v| v.settle_submit(ticket, outcome)).flatten() {
            announce(ui, kind, text);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("contact submission {} started without a browser runtime", pending.ticket.generation());
        let _ = (view_state, ui);
    }
}
