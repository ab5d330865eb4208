//! Contact form state with a pending-submission guard.

use crate::model::contact::{ContactDraft, ContactField};
use crate::validate::FieldErrors;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a contact submission did not start.
#[derive(Debug)]
pub enum ContactFormError {
    /// A previous submission is still pending; the control stays disabled
    /// until it finishes.
    AlreadySubmitting,
    /// The draft failed field validation.
    Invalid(FieldErrors<ContactField>),
}

impl Display for ContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadySubmitting => write!(f, "a submission is already pending"),
            Self::Invalid(errors) => {
                write!(f, "draft failed validation on {} field(s)", errors.len())
            }
        }
    }
}

impl Error for ContactFormError {}

/// State of the contact form.
///
/// Submission is a two-phase flow around the (UI-side) artificial delay:
/// [`begin_submit`](ContactForm::begin_submit) validates and hands out the
/// draft, then either [`finish_submit`](ContactForm::finish_submit) on
/// success or [`fail_submit`](ContactForm::fail_submit) when the log write
/// failed. Re-submission while pending is rejected.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors<ContactField>,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
        self.errors.clear(ContactField::Name);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
        self.errors.clear(ContactField::Email);
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.draft.message = value.into();
        self.errors.clear(ContactField::Message);
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors<ContactField> {
        &self.errors
    }

    /// True while a submission is pending; the submit control should be
    /// disabled for the duration.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates the draft and enters the pending state.
    ///
    /// Returns the draft to hand to the contact log. A second call while
    /// pending fails with `AlreadySubmitting` without re-validating.
    pub fn begin_submit(&mut self) -> Result<ContactDraft, ContactFormError> {
        if self.submitting {
            return Err(ContactFormError::AlreadySubmitting);
        }

        let errors = self.draft.validate();
        self.errors = errors.clone();
        if !errors.is_empty() {
            return Err(ContactFormError::Invalid(errors));
        }

        self.submitting = true;
        Ok(self.draft.clone())
    }

    /// Leaves the pending state and resets the fields after a successful
    /// submission.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
        self.draft = ContactDraft::default();
        self.errors = FieldErrors::new();
    }

    /// Leaves the pending state but keeps the typed fields, so the user can
    /// retry after a persistence failure.
    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, ContactFormError};
    use crate::model::contact::ContactField;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Ada Lovelace");
        form.set_email("ada@example.org");
        form.set_message("I have an engine that needs a program.");
        form
    }

    #[test]
    fn begin_submit_rejects_invalid_draft() {
        let mut form = ContactForm::new();
        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, ContactFormError::Invalid(_)));
        assert!(!form.is_submitting());
        assert!(form.errors().get(ContactField::Email).is_some());
    }

    #[test]
    fn double_submit_is_rejected_while_pending() {
        let mut form = filled_form();

        form.begin_submit().unwrap();
        assert!(form.is_submitting());

        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, ContactFormError::AlreadySubmitting));
    }

    #[test]
    fn finish_submit_resets_fields_and_pending_state() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit();

        assert!(!form.is_submitting());
        assert!(form.draft().name.is_empty());
        assert!(form.draft().message.is_empty());
    }

    #[test]
    fn fail_submit_keeps_fields_for_retry() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.fail_submit();

        assert!(!form.is_submitting());
        assert_eq!(form.draft().name, "Ada Lovelace");

        // Retry goes through once no longer pending.
        form.begin_submit().unwrap();
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let mut form = ContactForm::new();
        form.begin_submit().unwrap_err();

        form.set_name("Ada");
        assert_eq!(form.errors().get(ContactField::Name), None);
        assert!(form.errors().get(ContactField::Email).is_some());
        assert!(form.errors().get(ContactField::Message).is_some());
    }
}
