//! Project domain model and draft validation.
//!
//! # Responsibility
//! - Define the canonical portfolio entry record and its unvalidated draft.
//! - Parse the comma-separated tech-stack input into an ordered list.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - Wire field names stay camelCase (`techStack`, `repoLink`, ...) to match
//!   the persisted JSON layout.

use crate::validate::{is_absolute_url, FieldErrors};
use serde::{Deserialize, Serialize};

/// Stable identifier for a portfolio entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = String;

/// Cover image substituted when a new project is created without one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?fit=crop&w=800&q=80";

/// Canonical portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable unique ID, assigned at creation.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Display-ordered technology names; duplicates permitted.
    pub tech_stack: Vec<String>,
    /// Optional, stored as empty string when absent.
    pub repo_link: String,
    /// Optional, stored as empty string when absent.
    pub demo_link: String,
    pub image_url: String,
}

/// Fields of the project form, used as keys in [`FieldErrors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectField {
    Title,
    Description,
    TechStack,
    RepoLink,
    DemoLink,
    ImageUrl,
}

impl ProjectField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::TechStack => "techStack",
            Self::RepoLink => "repoLink",
            Self::DemoLink => "demoLink",
            Self::ImageUrl => "imageUrl",
        }
    }
}

/// Unvalidated project form input.
///
/// `tech_stack_input` holds the raw comma-separated text; splitting happens
/// only after validation, at create/update time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech_stack_input: String,
    pub repo_link: String,
    pub demo_link: String,
    pub image_url: String,
}

impl ProjectDraft {
    /// Checks every field constraint and returns one message per failure.
    ///
    /// # Contract
    /// - `title`, `description` and the raw tech-stack input are required
    ///   after trimming.
    /// - Link fields are optional but must be absolute URLs when non-empty.
    /// - Pure: repeated calls on the same draft return the same mapping.
    pub fn validate(&self) -> FieldErrors<ProjectField> {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert(ProjectField::Title, "Project title is required");
        }
        if self.description.trim().is_empty() {
            errors.insert(ProjectField::Description, "Description is required");
        }
        if self.tech_stack_input.trim().is_empty() {
            errors.insert(ProjectField::TechStack, "Please list at least one technology");
        }

        if !self.repo_link.is_empty() && !is_absolute_url(&self.repo_link) {
            errors.insert(ProjectField::RepoLink, "Invalid URL format");
        }
        if !self.demo_link.is_empty() && !is_absolute_url(&self.demo_link) {
            errors.insert(ProjectField::DemoLink, "Invalid URL format");
        }
        if !self.image_url.is_empty() && !is_absolute_url(&self.image_url) {
            errors.insert(ProjectField::ImageUrl, "Invalid URL format");
        }

        errors
    }
}

/// Splits a comma-separated tech-stack input into trimmed, non-empty names.
///
/// Order is preserved and duplicates are kept; only entries that are empty
/// after trimming are dropped.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fixed initial project list used when no persisted data exists.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Student Management System".to_string(),
            description: "A Python-based GUI application to manage student records \
                          effectively using Tkinter and MySQL. Features include attendance \
                          tracking, grade management, and reporting tools."
                .to_string(),
            tech_stack: vec![
                "Python".to_string(),
                "Tkinter".to_string(),
                "MySQL".to_string(),
            ],
            repo_link: "https://github.com".to_string(),
            demo_link: "#".to_string(),
            image_url: "https://images.unsplash.com/photo-1484417894907-623942c8ee29?fit=crop&w=800&q=80"
                .to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "Portfolio Website".to_string(),
            description: "A modern, interactive portfolio website built with React, \
                          Tailwind CSS, and Framer Motion to showcase my skills and \
                          projects with style."
                .to_string(),
            tech_stack: vec![
                "React".to_string(),
                "Tailwind".to_string(),
                "Framer Motion".to_string(),
            ],
            repo_link: "https://github.com".to_string(),
            demo_link: "#".to_string(),
            image_url: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?fit=crop&w=800&q=80"
                .to_string(),
        },
    ]
}
