//! Contact form model and validation.

use desktop_app_contract::ShellError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl From<ContactFormError> for ShellError {
    fn from(err: ContactFormError) -> Self {
        ShellError::Validation(err.to_string())
    }
}

impl ContactForm {
    /// Checks every field is filled and the email is well formed.
    ///
    /// Whitespace-only fields count as missing.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ContactFormError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactFormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn success_message(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent. I'll get back to you soon.",
            self.name
        )
    }
}

/// `local@domain.tld`: one `@`, no whitespace, a non-empty local part and a dot inside the domain
/// with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some(first) = domain.chars().next() else {
        return false;
    };
    let inner = &domain[first.len_utf8()..];
    match inner.char_indices().last() {
        Some((last_start, _)) => inner[..last_start].contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice desktop.".to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
        assert_eq!(
            filled().success_message(),
            "Thank you, Ada! Your message has been sent. I'll get back to you soon."
        );
    }

    #[test]
    fn any_blank_field_is_missing() {
        let mut form = filled();
        form.subject = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField));

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField));
    }

    #[test]
    fn malformed_email_is_rejected_with_dialog_text() {
        let mut form = filled();
        form.email = "ada@example".to_string();
        let err = form.validate().expect_err("invalid email");
        assert_eq!(
            ShellError::from(err),
            ShellError::Validation("Please enter a valid email address.".to_string())
        );
    }

    #[test]
    fn email_shape_rules() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("plain"));
    }
}
