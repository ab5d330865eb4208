//! Core domain logic for the portfolio app.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod validate;

pub use clock::{Clock, SystemClock};
pub use form::contact_form::{ContactForm, ContactFormError};
pub use form::project_form::ProjectForm;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactDraft, ContactField, ContactMessage};
pub use model::project::{
    parse_tech_stack, seed_projects, Project, ProjectDraft, ProjectField, ProjectId,
    PLACEHOLDER_IMAGE_URL,
};
pub use repo::contact_log::{ContactLog, SubmitError, MESSAGES_KEY};
pub use repo::project_repo::{ProjectRepository, RepoError, RepoResult, PROJECTS_KEY};
pub use service::portfolio_service::PortfolioService;
pub use store::file::FileStore;
pub use store::memory::MemoryStore;
pub use store::{KeyValueStore, StoreError, StoreResult};
pub use validate::{is_absolute_url, is_valid_email, FieldErrors};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
