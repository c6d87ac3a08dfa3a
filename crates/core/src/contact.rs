use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Fields a visitor fills in on the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Per-field validation messages
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Name is required.");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ContactField::Email, "Email is required.");
        } else if !is_valid_email(email) {
            errors.insert(ContactField::Email, "Invalid email.");
        }

        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Message is required.");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// What the contact section shows under the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Invalid(FieldErrors),
    Sent,
    Failed,
}

impl ContactStatus {
    pub fn field_error(&self, field: ContactField) -> Option<&'static str> {
        match self {
            ContactStatus::Invalid(errors) => errors.get(&field).copied(),
            _ => None,
        }
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self {
            ContactStatus::Sent => Some(SENT_MESSAGE),
            ContactStatus::Failed => Some(FAILED_MESSAGE),
            _ => None,
        }
    }
}

/// Basic RFC 5322 shape check without a full grammar
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.len() > 64 || local.chars().any(char::is_whitespace) {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 || !domain.contains('.') {
        return false;
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
        || domain.contains("..")
        || domain.chars().any(char::is_whitespace)
    {
        return false;
    }

    match domain.rfind('.') {
        Some(last_dot) => domain[last_dot + 1..].len() >= 2,
        None => false,
    }
}
