// SPDX-License-Identifier: MPL-2.0
//! Contact section: form editing, validation, and the simulated send.
//!
//! The form follows the "state down, messages up" pattern: `update` mutates
//! the component state and returns an [`Event`] describing what the parent
//! application should do next (show a toast, start the send task, record a
//! completed submission).

pub mod validate;
mod view;

pub use view::{view, ViewContext};

use std::f32::consts::PI;
use std::time::Duration;

/// Simulated network latency of a send.
pub const SEND_LATENCY: Duration = Duration::from_millis(2000);

/// Toast text shown when a send completes.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Spinner rotation advance per tick (ticks arrive every ~100 ms).
const SPINNER_STEP: f32 = PI / 5.0;

/// Field values captured from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The four form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Outcome of a simulated send.
///
/// There is deliberately no failure variant: the simulator always succeeds.
/// Connecting a real backend requires designing an error outcome and its
/// user-facing message first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered(FormSubmission),
}

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    SubmitPressed,
    SendCompleted(SendOutcome),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Validation failed; the aggregated message should be shown as an
    /// error toast.
    Rejected(String),
    /// Validation passed; the parent should start the simulated send with
    /// this snapshot of the fields.
    SendRequested(FormSubmission),
    /// The simulated send finished; the parent should show the success
    /// toast and record the submission.
    Delivered(FormSubmission),
}

/// Contact form state.
#[derive(Debug, Default)]
pub struct State {
    fields: FormSubmission,
    sending: bool,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a contact message and returns the event for the parent.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                match field {
                    Field::Name => self.fields.name = value,
                    Field::Email => self.fields.email = value,
                    Field::Subject => self.fields.subject = value,
                    Field::Message => self.fields.message = value,
                }
                Event::None
            }
            Message::SubmitPressed => {
                if self.sending {
                    // The submit button is disabled while sending; a stray
                    // press is ignored.
                    return Event::None;
                }
                match validate::validate(&self.fields) {
                    Err(violations) => Event::Rejected(validate::aggregate(&violations)),
                    Ok(()) => {
                        self.sending = true;
                        Event::SendRequested(self.fields.clone())
                    }
                }
            }
            Message::SendCompleted(SendOutcome::Delivered(submission)) => {
                self.sending = false;
                self.spinner_rotation = 0.0;
                self.fields = FormSubmission::default();
                Event::Delivered(submission)
            }
        }
    }

    /// Whether a simulated send is in flight (submit button disabled).
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Advances the busy-spinner rotation; called from the periodic tick.
    pub fn tick_spinner(&mut self) {
        self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % (2.0 * PI);
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Current field values.
    #[must_use]
    pub fn fields(&self) -> &FormSubmission {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        let mut state = State::new();
        state.update(Message::FieldChanged(Field::Name, "Jo".into()));
        state.update(Message::FieldChanged(Field::Email, "a@b.com".into()));
        state.update(Message::FieldChanged(Field::Subject, "Hi there".into()));
        state.update(Message::FieldChanged(
            Field::Message,
            "This is a long enough message".into(),
        ));
        state
    }

    #[test]
    fn field_changes_are_stored() {
        let state = filled_state();
        assert_eq!(state.fields().name, "Jo");
        assert_eq!(state.fields().email, "a@b.com");
        assert_eq!(state.fields().subject, "Hi there");
        assert_eq!(state.fields().message, "This is a long enough message");
    }

    #[test]
    fn submit_with_invalid_fields_is_rejected() {
        let mut state = State::new();
        state.update(Message::FieldChanged(Field::Name, "A".into()));

        let event = state.update(Message::SubmitPressed);
        match event {
            Event::Rejected(message) => {
                assert!(message.contains("Name must be at least 2 characters long"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(!state.is_sending());
    }

    #[test]
    fn submit_with_valid_fields_requests_send() {
        let mut state = filled_state();

        let event = state.update(Message::SubmitPressed);
        match event {
            Event::SendRequested(submission) => {
                assert_eq!(submission.name, "Jo");
                assert_eq!(submission.email, "a@b.com");
            }
            other => panic!("expected send request, got {other:?}"),
        }
        assert!(state.is_sending());
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut state = filled_state();
        state.update(Message::SubmitPressed);

        let event = state.update(Message::SubmitPressed);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn completion_clears_form_and_restores_button() {
        let mut state = filled_state();
        let Event::SendRequested(submission) = state.update(Message::SubmitPressed) else {
            panic!("expected send request");
        };

        let event = state.update(Message::SendCompleted(SendOutcome::Delivered(submission)));
        match event {
            Event::Delivered(delivered) => assert_eq!(delivered.subject, "Hi there"),
            other => panic!("expected delivery, got {other:?}"),
        }

        assert!(!state.is_sending());
        assert_eq!(state.fields(), &FormSubmission::default());
    }

    #[test]
    fn spinner_rotation_wraps() {
        let mut state = State::new();
        for _ in 0..100 {
            state.tick_spinner();
        }
        assert!(state.spinner_rotation() >= 0.0);
        assert!(state.spinner_rotation() < 2.0 * PI);
    }
}
