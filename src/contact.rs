use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Fixed latency of the simulated submission.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(2000);

/// Minimum lengths are counted in characters (Unicode scalar values) of the
/// trimmed value, not in bytes or UTF-16 units.
pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

// Structural check only: something@something.something without spaces.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control `name`/`id` attribute, also the request body key.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = match self {
            Field::Name => "El nombre",
            Field::Email => "El email",
            Field::Message => "El mensaje",
        };
        f.write_str(subject)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} es requerido")]
    Required(Field),
    #[error("{0} debe tener al menos {1} caracteres")]
    TooShort(Field, usize),
    #[error("{0} no es válido")]
    InvalidFormat(Field),
}

/// Raised when the user-facing delivery fails. Nothing produces this while
/// submission is simulated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Hubo un error al enviar el mensaje. Por favor, intenta de nuevo.")]
    Delivery(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{} field(s) failed validation", .0.count())]
    Invalid(FormErrors),
}

/// Field values, also the request body a real backend would receive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }

    pub fn count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

fn check_min_len(field: Field, value: &str, min: usize) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::Required(field))
    } else if trimmed.chars().count() < min {
        Err(FieldError::TooShort(field, min))
    } else {
        Ok(())
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    check_min_len(Field::Name, value, NAME_MIN_CHARS)
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(Field::Email))
    } else if !EMAIL_RE.is_match(value) {
        Err(FieldError::InvalidFormat(Field::Email))
    } else {
        Ok(())
    }
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    check_min_len(Field::Message, value, MESSAGE_MIN_CHARS)
}

pub fn validate(message: &ContactMessage) -> FormErrors {
    FormErrors {
        name: validate_name(&message.name).err(),
        email: validate_email(&message.email).err(),
        message: validate_message(&message.message).err(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Everything the contact form renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactMessage,
    errors: FormErrors,
    status: SubmitStatus,
    last_error: Option<SubmitError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Why the last delivery failed, while the error banner is up.
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Keystroke in `field`. Clears that field's error and no other.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
        self.errors.clear(field);
    }

    /// Submit attempt. On success the form is `Submitting` and the returned
    /// snapshot is what should be delivered.
    pub fn submit(&mut self) -> Result<ContactMessage, SubmitBlocked> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.status = SubmitStatus::Idle;
        self.last_error = None;
        self.errors = validate(&self.values);
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors));
        }
        self.status = SubmitStatus::Submitting;
        Ok(self.values.clone())
    }

    /// Apply the delivery outcome of the in-flight submission. Ignored when
    /// nothing is in flight.
    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.values = ContactMessage::default();
                self.errors = FormErrors::default();
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                self.status = SubmitStatus::Error;
                self.last_error = Some(err);
            }
        }
    }

    /// Close the error banner.
    pub fn dismiss_error(&mut self) {
        if self.status == SubmitStatus::Error {
            self.status = SubmitStatus::Idle;
            self.last_error = None;
        }
    }
}

/// Where a validated message goes. The page ships with
/// [`SimulatedTransport`]; a real backend plugs in here with the same
/// `name`/`email`/`message` body.
pub trait ContactTransport {
    fn deliver(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl ContactTransport for SimulatedTransport {
    fn deliver(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        match serde_json::to_string(message) {
            Ok(body) => log::info!("contact form submitted: {body}"),
            Err(err) => log::warn!("contact form submitted, body not serializable: {err}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, name);
        form.edit(Field::Email, email);
        form.edit(Field::Message, message);
        form
    }

    struct FailingTransport;

    impl ContactTransport for FailingTransport {
        fn deliver(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
            Err(SubmitError::Delivery("connection reset".to_string()))
        }
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Err(FieldError::Required(Field::Name)));
        assert_eq!(validate_name("   "), Err(FieldError::Required(Field::Name)));
        assert_eq!(validate_name(" a "), Err(FieldError::TooShort(Field::Name, 2)));
        assert_eq!(validate_name("Jo"), Ok(()));
        // counted in characters, not bytes
        assert_eq!(validate_name("Ñ"), Err(FieldError::TooShort(Field::Name, 2)));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email("a@b.c"), Ok(()));
        assert_eq!(validate_email("peredoroj@gmail.com"), Ok(()));
        assert_eq!(validate_email("a@b"), Err(FieldError::InvalidFormat(Field::Email)));
        assert_eq!(validate_email("foo"), Err(FieldError::InvalidFormat(Field::Email)));
        assert_eq!(validate_email("a b@c.d"), Err(FieldError::InvalidFormat(Field::Email)));
        assert_eq!(validate_email("a@@b.c"), Err(FieldError::InvalidFormat(Field::Email)));
        assert_eq!(validate_email(""), Err(FieldError::Required(Field::Email)));
        assert_eq!(validate_email("  "), Err(FieldError::Required(Field::Email)));
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(
            validate_message("short"),
            Err(FieldError::TooShort(Field::Message, 10))
        );
        assert_eq!(validate_message("this is long enough"), Ok(()));
        assert_eq!(
            validate_message("     "),
            Err(FieldError::Required(Field::Message))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Required(Field::Name).to_string(),
            "El nombre es requerido"
        );
        assert_eq!(
            FieldError::TooShort(Field::Name, NAME_MIN_CHARS).to_string(),
            "El nombre debe tener al menos 2 caracteres"
        );
        assert_eq!(
            FieldError::InvalidFormat(Field::Email).to_string(),
            "El email no es válido"
        );
        assert_eq!(
            FieldError::TooShort(Field::Message, MESSAGE_MIN_CHARS).to_string(),
            "El mensaje debe tener al menos 10 caracteres"
        );
    }

    #[test]
    fn test_invalid_submit_is_blocked() {
        let mut form = filled("J", "foo", "short");
        let res = form.submit();
        let Err(SubmitBlocked::Invalid(errors)) = res else {
            panic!("submit should be blocked, got {res:?}");
        };
        assert_eq!(errors.count(), 3);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(!form.is_submit_disabled());
        assert_eq!(form.error(Field::Email), Some(FieldError::InvalidFormat(Field::Email)));
    }

    #[test]
    fn test_successful_submission_clears_form() {
        let mut form = filled("Joaquin", "a@b.c", "this is long enough");
        assert_eq!(form.status(), SubmitStatus::Idle);

        let sent = form.submit().expect("valid form should submit");
        assert_eq!(sent.name, "Joaquin");
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert!(form.is_submit_disabled());

        form.finish(SimulatedTransport.deliver(&sent));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(!form.is_submit_disabled());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn test_duplicate_submit_refused_while_in_flight() {
        let mut form = filled("Joaquin", "a@b.c", "this is long enough");
        form.submit().expect("valid form should submit");
        assert_eq!(form.submit(), Err(SubmitBlocked::InFlight));
        assert!(form.is_submit_disabled());
    }

    #[test]
    fn test_failed_delivery_keeps_values() {
        let mut form = filled("Joaquin", "a@b.c", "this is long enough");
        let sent = form.submit().expect("valid form should submit");
        form.finish(FailingTransport.deliver(&sent));
        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.value(Field::Email), "a@b.c");
        assert_eq!(
            form.last_error(),
            Some(&SubmitError::Delivery("connection reset".to_string()))
        );

        form.dismiss_error();
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.last_error(), None);

        // retry goes through
        form.submit().expect("retry should submit");
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn test_retry_clears_delivery_error() {
        let mut form = filled("Joaquin", "a@b.c", "this is long enough");
        let sent = form.submit().expect("valid form should submit");
        form.finish(FailingTransport.deliver(&sent));
        assert!(form.last_error().is_some());

        form.submit().expect("retry should submit");
        assert_eq!(form.last_error(), None);
        form.finish(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert_eq!(form.last_error(), None);
    }

    #[test]
    fn test_lengths_count_characters() {
        // one scalar value, two UTF-16 units, four bytes
        assert_eq!(validate_name("😀"), Err(FieldError::TooShort(Field::Name, NAME_MIN_CHARS)));
        assert_eq!(validate_name("😀😀"), Ok(()));
        assert_eq!(validate_message(&"ñ".repeat(9)), Err(FieldError::TooShort(Field::Message, 10)));
        assert_eq!(validate_message(&"ñ".repeat(10)), Ok(()));
    }

    #[test]
    fn test_new_attempt_clears_banner() {
        let mut form = filled("Joaquin", "a@b.c", "this is long enough");
        let sent = form.submit().expect("valid form should submit");
        form.finish(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert_eq!(sent.email, "a@b.c");

        // fields were reset, so the next attempt is blocked and the banner goes away
        assert!(matches!(form.submit(), Err(SubmitBlocked::Invalid(_))));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.error(Field::Message), Some(FieldError::Required(Field::Message)));
    }

    #[test]
    fn test_finish_without_submission_is_ignored() {
        let mut form = filled("Joaquin", "a@b.c", "this is long enough");
        form.finish(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.value(Field::Name), "Joaquin");
    }

    #[test]
    fn test_edit_clears_only_its_own_error() {
        let mut form = filled("", "nope", "this is long enough");
        assert!(form.submit().is_err());
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Email).is_some());

        form.edit(Field::Name, "J");
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.error(Field::Email), Some(FieldError::InvalidFormat(Field::Email)));
    }

    #[test]
    fn test_request_body_fields() {
        let body = ContactMessage {
            name: "Jo".to_string(),
            email: "a@b.c".to_string(),
            message: "this is long enough".to_string(),
        };
        let json = serde_json::to_value(&body).expect("body should serialize");
        for field in Field::ALL {
            assert_eq!(json[field.key()], body.get(field));
        }
    }

    proptest! {
        #[test]
        fn short_names_always_fail(name in "\\s{0,3}[a-z]?\\s{0,3}") {
            prop_assert!(validate_name(&name).is_err());
            let mut form = filled(&name, "a@b.c", "this is long enough");
            prop_assert!(form.submit().is_err());
            prop_assert!(form.error(Field::Name).is_some());
        }

        #[test]
        fn long_enough_names_pass(name in "[a-zA-Z]{2,20}") {
            prop_assert_eq!(validate_name(&name), Ok(()));
        }

        #[test]
        fn emails_without_dot_after_at_fail(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
            let email = format!("{local}@{domain}");
            prop_assert_eq!(validate_email(&email), Err(FieldError::InvalidFormat(Field::Email)));
        }

        #[test]
        fn structural_emails_pass(local in "[a-z0-9.]{1,8}", host in "[a-z]{1,8}", tld in "[a-z]{1,4}") {
            let email = format!("{local}@{host}.{tld}");
            prop_assert_eq!(validate_email(&email), Ok(()));
        }

        #[test]
        fn message_length_boundary(message in "[a-z ]{0,30}") {
            let trimmed = message.trim().chars().count();
            prop_assert_eq!(validate_message(&message).is_ok(), trimmed >= MESSAGE_MIN_CHARS);
        }
    }
}
