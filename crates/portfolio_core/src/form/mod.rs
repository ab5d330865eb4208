//! Form state for the project editor and the contact form.
//!
//! # Responsibility
//! - Hold per-field draft text and the current error mapping.
//! - Enforce the editing contract: changing a field clears that field's
//!   error, and only submit re-validates.
//!
//! # Invariants
//! - Errors shown to the user always come from the most recent submit,
//!   minus the fields edited since.

pub mod contact_form;
pub mod project_form;
