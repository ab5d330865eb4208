//! Field-level validation primitives shared by the project and contact forms.
//!
//! # Responsibility
//! - Collect per-field error messages into an ordered mapping.
//! - Provide URL and email syntax checks used by draft validation.
//!
//! # Invariants
//! - Validation helpers are pure: same input, same result, no side effects.
//! - Absence of a field key in `FieldErrors` means that field is valid.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use url::Url;

// Permissive single-@ check: non-whitespace local part, @, domain with at
// least one dot. Deliberately not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Ordered mapping from a form field to a human-readable error message.
///
/// One entry per failing field; re-inserting a field replaces its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    entries: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Records an error message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Returns the message recorded for `field`, if any.
    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Removes the entry for `field`.
    ///
    /// Used by form state when the user edits a field: editing clears that
    /// field's error, and only submit re-validates.
    pub fn clear(&mut self, field: F) {
        self.entries.remove(&field);
    }

    /// Returns `true` when every field is valid.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Returns `true` when `value` parses as an absolute URL with a scheme and a
/// host-bearing authority.
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

/// Returns `true` when `value` passes the permissive email syntax check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
