use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics
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

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Why a contact submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Message shown once the mail client handoff starts
pub const HANDOFF_MESSAGE: &str = "Opening email client...";

/// Raw field values as typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trim every field and check it, stopping at the first failing rule
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = trim(&self.name);
        let email = trim(&self.email);
        let message = trim(&self.message);

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }

        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// A validated submission, every field already trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    pub fn subject(&self) -> String {
        format!("Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Build the `mailto:` URI addressed to `to`
    pub fn mailto(&self, to: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode_uri_component(&self.subject()),
            encode_uri_component(&self.body())
        )
    }
}

/// Strip leading and trailing whitespace, including the U+FEFF byte order mark
/// that `str::trim` keeps
pub fn trim(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Loose `local@domain.tld` shape check: no whitespace, one `@`, a dot after it
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Percent-encode the way the browser's `encodeURIComponent` does
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Kind of transient status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Error => "error",
            NoticeKind::Success => "success",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status message rendered under the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Class shared by every notice node, used to find and replace the current one
pub const NOTICE_CLASS: &str = "form-message";

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    /// Full `class` attribute for the notice node
    pub fn class_name(&self) -> String {
        format!("{NOTICE_CLASS} {NOTICE_CLASS}-{}", self.kind)
    }
}

impl From<ContactError> for Notice {
    fn from(err: ContactError) -> Self {
        Notice::error(err.to_string())
    }
}

/// What the page should do in response to a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    /// Where to navigate, set only when validation passed
    pub navigate_to: Option<String>,
}

/// Validate the form and decide the notice and navigation for a submit
pub fn submit(form: &ContactForm, to: &str) -> SubmitOutcome {
    match form.validate() {
        Ok(submission) => SubmitOutcome {
            notice: Notice::success(HANDOFF_MESSAGE),
            navigate_to: Some(submission.mailto(to)),
        },
        Err(err) => SubmitOutcome {
            notice: err.into(),
            navigate_to: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_trims_fields() {
        let form = ContactForm::new("  Jane ", "\tjane@example.com\n", " Hi ");
        let submission = form.validate().unwrap();
        assert_eq!(submission.subject(), "Contact from Jane");
        assert_eq!(
            submission.body(),
            "Name: Jane\nEmail: jane@example.com\n\nMessage:\nHi"
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let form = ContactForm::new("\u{FEFF}", "jane@example.com", "Hi");
        assert_eq!(form.validate(), Err(ContactError::MissingFields));

        let form = ContactForm::new("\u{FEFF}Jane\u{FEFF}", "jane@example.com", "Hi");
        assert_eq!(form.validate().unwrap().subject(), "Contact from Jane");
    }

    #[test]
    fn test_trim_strips_unicode_spaces() {
        assert_eq!(trim("\u{00A0}\u{2003} Jane \u{FEFF}\n"), "Jane");
        assert_eq!(trim("\u{FEFF}"), "");
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        let form = ContactForm::new("", "not-an-email", "Hi");
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let form = ContactForm::new("Jane", "jane@example.com", "   \n ");
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let form = ContactForm::new("Jane", "not-an-email", "Hi");
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("ja ne@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example."));
    }

    #[test]
    fn test_encode_uri_component_matches_browser() {
        assert_eq!(
            encode_uri_component("Contact from Jane"),
            "Contact%20from%20Jane"
        );
        assert_eq!(encode_uri_component("a:b@c\nd"), "a%3Ab%40c%0Ad");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("&=?/#+"), "%26%3D%3F%2F%23%2B");
        assert_eq!(encode_uri_component("✓"), "%E2%9C%93");
    }

    #[test]
    fn test_mailto_for_reference_input() {
        let submission = ContactForm::new("Jane", "jane@example.com", "Hi")
            .validate()
            .unwrap();
        let expected = concat!(
            "mailto:prajjwal.singhpratap@gmail.com",
            "?subject=Contact%20from%20Jane",
            "&body=Name%3A%20Jane%0AEmail%3A%20jane%40example.com%0A%0AMessage%3A%0AHi",
        );
        assert_eq!(submission.mailto("prajjwal.singhpratap@gmail.com"), expected);
    }

    #[test]
    fn test_body_keeps_inner_newlines() {
        let submission = ContactForm::new("Jane", "jane@example.com", "line one\nline two")
            .validate()
            .unwrap();
        assert_eq!(
            submission.body(),
            "Name: Jane\nEmail: jane@example.com\n\nMessage:\nline one\nline two"
        );
    }

    #[test]
    fn test_notice_class_names() {
        assert_eq!(Notice::error("x").class_name(), "form-message form-message-error");
        assert_eq!(
            Notice::success("x").class_name(),
            "form-message form-message-success"
        );
    }

    #[test]
    fn test_contact_error_to_notice() {
        let notice: Notice = ContactError::InvalidEmail.into();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Please enter a valid email address.");
    }

    #[test]
    fn test_submit_success() {
        let form = ContactForm::new("Jane", "jane@example.com", "Hi");
        let outcome = submit(&form, "me@example.com");
        assert_eq!(outcome.notice, Notice::success(HANDOFF_MESSAGE));
        assert!(
            outcome
                .navigate_to
                .as_deref()
                .unwrap()
                .starts_with("mailto:me@example.com?subject=")
        );
    }

    #[test]
    fn test_submit_failure_does_not_navigate() {
        let outcome = submit(&ContactForm::default(), "me@example.com");
        assert_eq!(outcome.notice, Notice::error("Please fill in all fields."));
        assert_eq!(outcome.navigate_to, None);
    }
}
