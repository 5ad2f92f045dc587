//! Contact form state and the `mailto:` link it dispatches.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Bytes left alone by JavaScript's `encodeURIComponent`; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SUBJECT_PREFIX: &str = "Portfolio Inquiry from ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Your email",
            Self::Message => "Your message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sent,
    Error,
}

impl SubmissionStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sent => Some("Message sent successfully!"),
            Self::Error => Some("Please fill in all fields."),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("the {0} field is empty")]
    MissingField(Field),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First empty field. Whitespace counts as content.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.field(*f).is_empty())
    }

    pub fn compose(&self, recipient: &str) -> Result<MailtoLink, ContactError> {
        if let Some(field) = self.missing_field() {
            return Err(ContactError::MissingField(field));
        }
        Ok(MailtoLink {
            recipient: recipient.to_string(),
            subject: format!("{SUBJECT_PREFIX}{}", self.name),
            body: format!("{}\n\nFrom: {}", self.message, self.email),
        })
    }
}

/// A `mailto:` URI. Subject and body are kept raw and encoded on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    recipient: String,
    subject: String,
    body: String,
}

impl MailtoLink {
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.recipient,
            utf8_percent_encode(&self.subject, URI_COMPONENT),
            utf8_percent_encode(&self.body, URI_COMPONENT),
        )
    }
}

/// Receives the URI of a dispatched link.
pub trait Navigator {
    fn navigate(&mut self, uri: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, uri: &str) {
        self(uri)
    }
}

/// Hands the URI to the browser, which opens the default mail client.
///
/// Fire-and-forget: nothing reports whether a mail client picked it up.
pub fn open_mail_client(uri: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(uri);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = uri;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    /// Validate, dispatch at most one link, and record the outcome.
    pub fn submit(&mut self, recipient: &str, navigator: &mut impl Navigator) -> SubmissionStatus {
        self.status = match self.form.compose(recipient) {
            Ok(link) => {
                navigator.navigate(&link.to_string());
                SubmissionStatus::Sent
            }
            Err(ContactError::MissingField(_)) => SubmissionStatus::Error,
        };
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "hello@example.com";

    fn filled(name: &str, email: &str, message: &str) -> ContactState {
        let mut state = ContactState::default();
        state.update_field(Field::Name, name);
        state.update_field(Field::Email, email);
        state.update_field(Field::Message, message);
        state
    }

    fn submit_recording(state: &mut ContactState) -> Vec<String> {
        let mut dispatched = Vec::new();
        state.submit(RECIPIENT, &mut |uri: &str| dispatched.push(uri.to_string()));
        dispatched
    }

    #[test]
    fn fresh_state_is_empty_and_idle() {
        let state = ContactState::default();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.form(), &ContactForm::default());
        assert_eq!(state.status().message(), None);
    }

    #[test]
    fn any_empty_field_is_an_error_without_navigation() {
        for empty in Field::ALL {
            let mut state = filled("Alice", "a@example.com", "Hello");
            state.update_field(empty, "");
            let dispatched = submit_recording(&mut state);
            assert_eq!(state.status(), SubmissionStatus::Error, "{empty} empty");
            assert!(dispatched.is_empty(), "{empty} empty");
        }
    }

    #[test]
    fn missing_field_reports_first_gap() {
        let state = filled("", "", "Hello");
        assert_eq!(state.form().missing_field(), Some(Field::Name));
        assert_eq!(
            state.form().compose(RECIPIENT),
            Err(ContactError::MissingField(Field::Name))
        );
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "the email field is empty"
        );
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let mut state = filled(" ", " ", " ");
        let dispatched = submit_recording(&mut state);
        assert_eq!(state.status(), SubmissionStatus::Sent);
        assert_eq!(dispatched.len(), 1);
    }

    #[test]
    fn complete_form_dispatches_exactly_one_link() {
        let mut state = filled("Alice", "a@example.com", "Hello");
        let dispatched = submit_recording(&mut state);
        assert_eq!(state.status(), SubmissionStatus::Sent);
        assert_eq!(
            dispatched,
            vec![
                "mailto:hello@example.com?subject=Portfolio%20Inquiry%20from%20Alice\
                 &body=Hello%0A%0AFrom%3A%20a%40example.com"
                    .to_string()
            ]
        );
        assert_eq!(state.status().message(), Some("Message sent successfully!"));
    }

    #[test]
    fn subject_encodes_literal_name() {
        let link = filled("Jo Ann", "jo@example.com", "Hi")
            .form()
            .compose(RECIPIENT)
            .unwrap();
        assert_eq!(link.recipient(), RECIPIENT);
        assert_eq!(link.subject(), "Portfolio Inquiry from Jo Ann");
        assert!(link
            .to_string()
            .contains("subject=Portfolio%20Inquiry%20from%20Jo%20Ann&"));
    }

    #[test]
    fn user_input_cannot_inject_mailto_fields() {
        let link = filled("x&cc=evil@example.com", "a@example.com", "a?b#c&bcc=z")
            .form()
            .compose(RECIPIENT)
            .unwrap()
            .to_string();
        assert_eq!(link.matches('&').count(), 1);
        assert_eq!(link.matches('?').count(), 1);
        assert!(!link.contains('#'));
        assert!(link.contains("x%26cc%3Devil%40example.com"));
    }

    #[test]
    fn encoding_matches_uri_component_rules() {
        let link = filled("it's (me)!", "a@example.com", "~*._-é")
            .form()
            .compose(RECIPIENT)
            .unwrap()
            .to_string();
        assert!(link.contains("subject=Portfolio%20Inquiry%20from%20it's%20(me)!"));
        assert!(link.contains("body=~*._-%C3%A9%0A%0AFrom"));
    }

    #[test]
    fn updating_one_field_leaves_others_and_status_alone() {
        let mut state = filled("Alice", "a@example.com", "Hello");
        state.update_field(Field::Name, "");
        submit_recording(&mut state);
        assert_eq!(state.status(), SubmissionStatus::Error);

        state.update_field(Field::Name, "Bob");
        assert_eq!(state.form().name, "Bob");
        assert_eq!(state.form().email, "a@example.com");
        assert_eq!(state.form().message, "Hello");
        assert_eq!(state.status(), SubmissionStatus::Error);
    }

    #[test]
    fn error_is_recoverable_by_resubmitting() {
        let mut state = filled("Alice", "", "Hello");
        assert!(submit_recording(&mut state).is_empty());
        assert_eq!(state.status().message(), Some("Please fill in all fields."));

        state.update_field(Field::Email, "a@example.com");
        assert_eq!(submit_recording(&mut state).len(), 1);
        assert_eq!(state.status(), SubmissionStatus::Sent);
    }
}
