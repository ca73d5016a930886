//! Project collection state and the create-project mutation.
//!
//! DESIGN
//! ======
//! The store holds every user's projects in insertion order. Ownership
//! filtering and paging happen at read time in `util::pagination`, so the
//! store never keeps per-user or per-page copies.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Project;

/// Cover image used when a draft leaves the image URL blank.
pub const PLACEHOLDER_COVER_IMAGE: &str = "/images/project-cover.svg";

/// Shared project list state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub projects: Vec<Project>,
}

/// Form input for a new project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub cover_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectDraftError {
    #[error("project title is required")]
    EmptyTitle,
}

impl ProjectDraft {
    /// Trim the draft and fill defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDraftError::EmptyTitle`] when the title is blank.
    pub fn normalized(&self) -> Result<Self, ProjectDraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ProjectDraftError::EmptyTitle);
        }
        let cover_image = match self.cover_image.trim() {
            "" => PLACEHOLDER_COVER_IMAGE,
            url => url,
        };
        Ok(Self {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            cover_image: cover_image.to_owned(),
        })
    }
}

impl BoardState {
    /// Append a project owned by `owner_id` and return it.
    ///
    /// # Errors
    ///
    /// Propagates draft validation failures; the store is unchanged on error.
    pub fn create_project(&mut self, draft: &ProjectDraft, owner_id: &str) -> Result<Project, ProjectDraftError> {
        let draft = draft.normalized()?;
        let project = Project {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            cover_image: draft.cover_image,
            created_by: owner_id.to_owned(),
        };
        self.projects.push(project.clone());
        Ok(project)
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
