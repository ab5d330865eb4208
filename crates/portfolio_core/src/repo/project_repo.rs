//! Project repository: canonical project list plus persistence mirroring.
//!
//! # Responsibility
//! - Own the in-memory project list loaded once at startup.
//! - Coordinate create/update/delete against the persisted JSON blob.
//!
//! # Invariants
//! - Every project in the list carries a unique `id`.
//! - List order is insertion order; edits keep position, deletes shorten
//!   without reordering.
//! - A failed persist leaves the in-memory list at the last committed value.

use crate::clock::Clock;
use crate::model::project::{
    parse_tech_stack, seed_projects, Project, ProjectDraft, ProjectField, ProjectId,
    PLACEHOLDER_IMAGE_URL,
};
use crate::repo::IdSequence;
use crate::store::{KeyValueStore, StoreError};
use crate::validate::FieldErrors;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key the project list is persisted under.
pub const PROJECTS_KEY: &str = "puran_projects";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised by project repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// Draft failed field validation; never persisted.
    Validation(FieldErrors<ProjectField>),
    /// Update target does not exist.
    NotFound(ProjectId),
    /// Persistence write failed; in-memory state is unchanged.
    Store(StoreError),
    /// The list could not be serialized for persistence.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "draft failed validation on {} field(s)", errors.len())
            }
            Self::NotFound(id) => write!(f, "project not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize project list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Repository owning the canonical project list.
///
/// The store is a durable mirror, not a second source of truth: every
/// mutation serializes the whole list and overwrites the blob.
pub struct ProjectRepository<'store, S: KeyValueStore, C: Clock> {
    store: &'store S,
    clock: C,
    ids: IdSequence,
    projects: Vec<Project>,
}

impl<'store, S: KeyValueStore, C: Clock> ProjectRepository<'store, S, C> {
    /// Loads the persisted list, seeding the fixed example projects when the
    /// blob is absent or unparsable.
    ///
    /// # Contract
    /// - A corrupt blob is recovered by falling back to the seed list; the
    ///   failure is logged, not surfaced.
    /// - The seed list is persisted immediately so a following `load`
    ///   observes the same state.
    pub fn load(store: &'store S, clock: C) -> RepoResult<Self> {
        let (projects, seeded) = match store.get(PROJECTS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Project>>(&raw) {
                Ok(list) => (list, false),
                Err(err) => {
                    warn!(
                        "event=projects_load module=repo status=corrupt fallback=seed error={err}"
                    );
                    (seed_projects(), true)
                }
            },
            None => (seed_projects(), true),
        };

        let mut ids = IdSequence::default();
        for project in &projects {
            ids.observe(&project.id);
        }

        let repo = Self {
            store,
            clock,
            ids,
            projects,
        };

        if seeded {
            repo.persist(&repo.projects)?;
        }
        info!(
            "event=projects_load module=repo status=ok seeded={seeded} count={}",
            repo.projects.len()
        );
        Ok(repo)
    }

    /// Returns the current list in insertion order.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// Appends a new project built from a validated draft.
    ///
    /// # Contract
    /// - Revalidates the draft and refuses to persist invalid data.
    /// - Assigns a fresh unique id from the clock.
    /// - An empty image URL is replaced by the placeholder cover.
    pub fn create(&mut self, draft: &ProjectDraft) -> RepoResult<Project> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(RepoError::Validation(errors));
        }

        let image_url = if draft.image_url.trim().is_empty() {
            PLACEHOLDER_IMAGE_URL.to_string()
        } else {
            draft.image_url.clone()
        };

        let project = Project {
            id: self.ids.next(self.clock.now()),
            title: draft.title.clone(),
            description: draft.description.clone(),
            tech_stack: parse_tech_stack(&draft.tech_stack_input),
            repo_link: draft.repo_link.clone(),
            demo_link: draft.demo_link.clone(),
            image_url,
        };

        let mut candidate = self.projects.clone();
        candidate.push(project.clone());
        self.persist(&candidate)?;
        self.projects = candidate;

        info!(
            "event=project_create module=repo status=ok id={} count={}",
            project.id,
            self.projects.len()
        );
        Ok(project)
    }

    /// Replaces the fields of an existing project in place.
    ///
    /// # Contract
    /// - Position in the list and `id` are preserved.
    /// - Returns `NotFound` when no project carries `id`.
    pub fn update(&mut self, id: &str, draft: &ProjectDraft) -> RepoResult<Project> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(RepoError::Validation(errors));
        }

        let position = self
            .projects
            .iter()
            .position(|project| project.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;

        let updated = Project {
            id: id.to_string(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            tech_stack: parse_tech_stack(&draft.tech_stack_input),
            repo_link: draft.repo_link.clone(),
            demo_link: draft.demo_link.clone(),
            image_url: draft.image_url.clone(),
        };

        let mut candidate = self.projects.clone();
        candidate[position] = updated.clone();
        self.persist(&candidate)?;
        self.projects = candidate;

        info!("event=project_update module=repo status=ok id={id}");
        Ok(updated)
    }

    /// Removes the project with `id`; absent ids are a no-op.
    ///
    /// Caller-side confirmation ("are you sure?") is a collaborator concern,
    /// not enforced here.
    pub fn delete(&mut self, id: &str) -> RepoResult<()> {
        if !self.projects.iter().any(|project| project.id == id) {
            info!("event=project_delete module=repo status=noop id={id}");
            return Ok(());
        }

        let candidate: Vec<Project> = self
            .projects
            .iter()
            .filter(|project| project.id != id)
            .cloned()
            .collect();
        self.persist(&candidate)?;
        self.projects = candidate;

        info!(
            "event=project_delete module=repo status=ok id={id} count={}",
            self.projects.len()
        );
        Ok(())
    }

    fn persist(&self, candidate: &[Project]) -> RepoResult<()> {
        let blob = serde_json::to_string(candidate)?;
        self.store.set(PROJECTS_KEY, &blob).map_err(|err| {
            warn!("event=projects_persist module=repo status=error error={err}");
            RepoError::Store(err)
        })
    }
}
