//! Contact form validation and `mailto:` construction.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Pragmatic shape check: something@something.something, no whitespace, one `@`.
static EMAIL_SHAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").ok());

/// Browsers treat the byte-order mark as whitespace when trimming form input.
fn is_form_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn trim_form(raw: &str) -> String {
    raw.trim_matches(is_form_space).to_string()
}

/// Required fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Element id of the inline error container, also used for `aria-describedby`.
    #[must_use]
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Message => "message-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your message.")]
    MissingMessage,
}

impl FieldError {
    #[must_use]
    pub const fn field(self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::MissingEmail | Self::InvalidEmail => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Raw field values as read from the form, trimmed on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: trim_form(name),
            email: trim_form(email),
            subject: trim_form(subject),
            message: trim_form(message),
        }
    }

    /// Validate every required field.
    ///
    /// # Errors
    ///
    /// Returns one error per failed field, in form order.
    pub fn validate(&self) -> Result<ValidContact, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(FieldError::MissingName);
        }
        if self.email.is_empty() {
            errors.push(FieldError::MissingEmail);
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.is_empty() {
            errors.push(FieldError::MissingMessage);
        }

        if errors.is_empty() {
            Ok(ValidContact {
                name: self.name.clone(),
                email: self.email.clone(),
                subject: (!self.subject.is_empty()).then(|| self.subject.clone()),
                message: self.message.clone(),
            })
        } else {
            log::debug!("contact form rejected with {} error(s)", errors.len());
            Err(errors)
        }
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
}

impl ValidContact {
    #[must_use]
    pub fn subject_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.subject.as_deref().unwrap_or(fallback)
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }

    /// Build the outgoing `mailto:` URI with percent-encoded subject and body.
    #[must_use]
    pub fn mailto(&self, recipient: &str, fallback_subject: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(self.subject_or(fallback_subject)),
            urlencoding::encode(&self.body())
        )
    }
}

/// Bare `mailto:` link offered as a manual fallback.
#[must_use]
pub fn mailto_href(recipient: &str) -> String {
    format!("mailto:{recipient}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, subject: &str, message: &str) -> ContactSubmission {
        ContactSubmission::new(name, email, subject, message)
    }

    #[test]
    fn email_shape_accepts_pragmatic_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana@example."));
    }

    #[test]
    fn empty_form_reports_every_field_in_order() {
        let errors = submission("", "", "", "").validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::MissingName,
                FieldError::MissingEmail,
                FieldError::MissingMessage
            ]
        );
        assert_eq!(errors[0].field(), ContactField::Name);
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let errors = submission("   ", "ana@example.com", "", "\n\t ")
            .validate()
            .unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::MissingName, FieldError::MissingMessage]
        );
    }

    #[test]
    fn malformed_email_gets_its_own_message() {
        let errors = submission("Ana", "ana@", "", "Hi").validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::InvalidEmail]);
        assert_eq!(errors[0].to_string(), "Please enter a valid email address.");
        assert_eq!(errors[0].field().error_id(), "email-error");
    }

    #[test]
    fn messages_match_copy() {
        assert_eq!(FieldError::MissingName.to_string(), "Please enter your name.");
        assert_eq!(
            FieldError::MissingEmail.to_string(),
            "Please enter your email address."
        );
        assert_eq!(
            FieldError::MissingMessage.to_string(),
            "Please enter your message."
        );
    }

    #[test]
    fn blank_subject_defaults() {
        let valid = submission("Ana", "ana@example.com", "  ", "Hello")
            .validate()
            .unwrap();
        assert_eq!(valid.subject_or("Website Inquiry"), "Website Inquiry");
        let uri = valid.mailto("office@zakconsult.com", "Website Inquiry");
        assert!(uri.starts_with("mailto:office@zakconsult.com?subject=Website%20Inquiry&body="));
    }

    #[test]
    fn body_follows_template_and_is_encoded() {
        let valid = submission(" Ana Lee ", "ana@example.com", "Q&A", "Line one\nLine two")
            .validate()
            .unwrap();
        assert_eq!(
            valid.body(),
            "Name: Ana Lee\nEmail: ana@example.com\n\nLine one\nLine two"
        );
        assert_eq!(
            valid.mailto("office@zakconsult.com", "Website Inquiry"),
            "mailto:office@zakconsult.com?subject=Q%26A&body=\
             Name%3A%20Ana%20Lee%0AEmail%3A%20ana%40example.com%0A%0ALine%20one%0ALine%20two"
        );
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let errors = submission("\u{FEFF}", "a@b.co", "", " \u{FEFF}hi\u{FEFF} ")
            .validate()
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::MissingName]);
        assert!(!is_valid_email("a\u{FEFF}b@c.co"));
        let valid = submission("Ana", "\u{FEFF}ana@example.com", "", "\u{FEFF}hi")
            .validate()
            .unwrap();
        assert_eq!(valid.body(), "Name: Ana\nEmail: ana@example.com\n\nhi");
    }

    #[test]
    fn reserved_marks_in_subject_are_escaped() {
        let valid = submission("Ana", "ana@example.com", "O'Brien (hi)!", "Hello")
            .validate()
            .unwrap();
        let uri = valid.mailto("office@zakconsult.com", "Website Inquiry");
        assert!(uri.starts_with(
            "mailto:office@zakconsult.com?subject=O%27Brien%20%28hi%29%21&body="
        ));
    }

    #[test]
    fn fallback_link_is_bare_mailto() {
        assert_eq!(
            mailto_href("office@zakconsult.com"),
            "mailto:office@zakconsult.com"
        );
    }
}
