//! Project editor form state.

use crate::model::project::{Project, ProjectDraft, ProjectField};
use crate::validate::FieldErrors;

/// State of the add/edit project dialog.
///
/// Each setter clears the edited field's error; validation only runs again
/// on [`submit`](ProjectForm::submit).
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    draft: ProjectDraft,
    errors: FieldErrors<ProjectField>,
}

impl ProjectForm {
    /// Empty form for the "add new project" flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record for the edit flow.
    ///
    /// The tech stack is re-joined with ", " into the raw comma input.
    pub fn for_edit(project: &Project) -> Self {
        Self {
            draft: ProjectDraft {
                title: project.title.clone(),
                description: project.description.clone(),
                tech_stack_input: project.tech_stack.join(", "),
                repo_link: project.repo_link.clone(),
                demo_link: project.demo_link.clone(),
                image_url: project.image_url.clone(),
            },
            errors: FieldErrors::new(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
        self.errors.clear(ProjectField::Title);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
        self.errors.clear(ProjectField::Description);
    }

    pub fn set_tech_stack_input(&mut self, value: impl Into<String>) {
        self.draft.tech_stack_input = value.into();
        self.errors.clear(ProjectField::TechStack);
    }

    pub fn set_repo_link(&mut self, value: impl Into<String>) {
        self.draft.repo_link = value.into();
        self.errors.clear(ProjectField::RepoLink);
    }

    pub fn set_demo_link(&mut self, value: impl Into<String>) {
        self.draft.demo_link = value.into();
        self.errors.clear(ProjectField::DemoLink);
    }

    pub fn set_image_url(&mut self, value: impl Into<String>) {
        self.draft.image_url = value.into();
        self.errors.clear(ProjectField::ImageUrl);
    }

    /// Current draft text, as typed.
    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// Errors from the last submit, minus fields edited since.
    pub fn errors(&self) -> &FieldErrors<ProjectField> {
        &self.errors
    }

    /// Validates the draft; on success returns it for the repository call.
    ///
    /// On failure the error mapping is stored for inline display and also
    /// returned to the caller.
    pub fn submit(&mut self) -> Result<ProjectDraft, FieldErrors<ProjectField>> {
        let errors = self.draft.validate();
        self.errors = errors.clone();
        if errors.is_empty() {
            Ok(self.draft.clone())
        } else {
            Err(errors)
        }
    }
}
