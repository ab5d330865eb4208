//! Append-only contact message log.
//!
//! # Responsibility
//! - Append validated inquiries to the persisted message list.
//!
//! # Invariants
//! - Messages are never mutated or deleted; the log is write-only from the
//!   application's point of view.
//! - A corrupt persisted blob restarts the log from empty rather than
//!   failing the submission.

use crate::clock::Clock;
use crate::model::contact::{ContactDraft, ContactField, ContactMessage};
use crate::repo::IdSequence;
use crate::store::{KeyValueStore, StoreError};
use crate::validate::FieldErrors;
use chrono::SecondsFormat;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key the message list is persisted under.
pub const MESSAGES_KEY: &str = "puran_messages";

/// Error raised by a contact submission.
#[derive(Debug)]
pub enum SubmitError {
    /// Draft failed field validation; nothing was appended.
    Validation(FieldErrors<ContactField>),
    /// Persistence failed; the message was not recorded.
    Store(StoreError),
    /// The message list could not be serialized for persistence.
    Serialize(serde_json::Error),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "draft failed validation on {} field(s)", errors.len())
            }
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize message list: {err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for SubmitError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Write-only log of submitted contact messages.
pub struct ContactLog<'store, S: KeyValueStore, C: Clock> {
    store: &'store S,
    clock: C,
    ids: IdSequence,
}

impl<'store, S: KeyValueStore, C: Clock> ContactLog<'store, S, C> {
    pub fn new(store: &'store S, clock: C) -> Self {
        Self {
            store,
            clock,
            ids: IdSequence::default(),
        }
    }

    /// Appends one validated message to the persisted list.
    ///
    /// # Contract
    /// - Revalidates the draft and refuses invalid submissions.
    /// - Assigns `id` and an ISO-8601 `date` from the clock.
    /// - Fire-and-forget: nothing is returned on success and the system
    ///   never reads the log back for display.
    pub fn submit(&mut self, draft: &ContactDraft) -> Result<(), SubmitError> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Validation(errors));
        }

        let mut messages = match self.store.get(MESSAGES_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<ContactMessage>>(&raw) {
                Ok(list) => list,
                Err(err) => {
                    warn!(
                        "event=messages_load module=repo status=corrupt fallback=empty error={err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        for message in &messages {
            self.ids.observe(&message.id);
        }

        let now = self.clock.now();
        let message = ContactMessage {
            id: self.ids.next(now),
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        messages.push(message);
        let blob = serde_json::to_string(&messages)?;
        self.store.set(MESSAGES_KEY, &blob)?;

        info!(
            "event=message_submit module=repo status=ok count={}",
            messages.len()
        );
        Ok(())
    }
}
