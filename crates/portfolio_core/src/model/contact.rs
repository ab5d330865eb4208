//! Contact message model and draft validation.
//!
//! # Responsibility
//! - Define the append-only inquiry record and its unvalidated draft.
//!
//! # Invariants
//! - Messages are never mutated or deleted after submission.
//! - `date` is an ISO-8601 (RFC 3339) timestamp string on the wire.

use crate::validate::{is_valid_email, FieldErrors};
use serde::{Deserialize, Serialize};

/// One submitted inquiry, as persisted in the message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Unique ID assigned at submission time.
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Submission timestamp, ISO-8601.
    pub date: String,
}

/// Fields of the contact form, used as keys in [`FieldErrors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Unvalidated contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Checks every field constraint and returns one message per failure.
    ///
    /// # Contract
    /// - Empty-after-trim fields report the required message, never the
    ///   format/length one.
    /// - `name` needs at least 2 characters, `message` at least 10, both
    ///   measured after trimming.
    pub fn validate(&self) -> FieldErrors<ContactField> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        } else if name.chars().count() < 2 {
            errors.insert(ContactField::Name, "Name must be at least 2 characters");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(ContactField::Email, "Please enter a valid email address");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        } else if message.chars().count() < 10 {
            errors.insert(
                ContactField::Message,
                "Message must be at least 10 characters",
            );
        }

        errors
    }
}
