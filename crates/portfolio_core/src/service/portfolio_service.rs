//! Portfolio use-case service.
//!
//! # Responsibility
//! - Provide one entry point for the UI layer over the project repository
//!   and the contact log.
//! - Delegate persistence to the repositories; never bypass their
//!   validation contracts.
//!
//! # Invariants
//! - Both repositories share one storage handle and one clock.

use crate::clock::Clock;
use crate::model::contact::ContactDraft;
use crate::model::project::{Project, ProjectDraft};
use crate::repo::contact_log::{ContactLog, SubmitError};
use crate::repo::project_repo::{ProjectRepository, RepoResult};
use crate::store::KeyValueStore;

/// Use-case facade over the project repository and contact log.
pub struct PortfolioService<'store, S: KeyValueStore, C: Clock> {
    projects: ProjectRepository<'store, S, C>,
    contact: ContactLog<'store, S, C>,
}

impl<'store, S: KeyValueStore, C: Clock + Clone> PortfolioService<'store, S, C> {
    /// Opens the service, loading (and seeding if needed) the project list.
    pub fn open(store: &'store S, clock: C) -> RepoResult<Self> {
        Ok(Self {
            projects: ProjectRepository::load(store, clock.clone())?,
            contact: ContactLog::new(store, clock),
        })
    }
}

impl<'store, S: KeyValueStore, C: Clock> PortfolioService<'store, S, C> {
    /// Current project list in display order.
    pub fn projects(&self) -> &[Project] {
        self.projects.list()
    }

    /// Creates a project from a validated draft.
    pub fn add_project(&mut self, draft: &ProjectDraft) -> RepoResult<Project> {
        self.projects.create(draft)
    }

    /// Edits an existing project in place.
    pub fn edit_project(&mut self, id: &str, draft: &ProjectDraft) -> RepoResult<Project> {
        self.projects.update(id, draft)
    }

    /// Deletes a project after caller-side confirmation.
    pub fn remove_project(&mut self, id: &str) -> RepoResult<()> {
        self.projects.delete(id)
    }

    /// Appends a contact message to the log.
    pub fn send_message(&mut self, draft: &ContactDraft) -> Result<(), SubmitError> {
        self.contact.submit(draft)
    }
}
