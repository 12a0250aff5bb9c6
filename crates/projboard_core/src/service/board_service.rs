//! Board use-case service.
//!
//! # Responsibility
//! - Admit form drafts into the store only after they pass validation.
//! - Map list drops onto status transitions.
//!
//! # Invariants
//! - `submit` never calls `add_project` for a rejected draft.
//! - Service APIs never bypass the store's notification path.

use crate::config::ProjectRules;
use crate::model::draft::{ProjectDraft, ProjectValidationError};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{MoveOutcome, ProjectStore};

/// Adapter-facing facade over one store and its admission rules.
pub struct ProjectBoard<'a> {
    store: &'a mut ProjectStore,
    rules: &'a ProjectRules,
}

impl<'a> ProjectBoard<'a> {
    pub fn new(store: &'a mut ProjectStore, rules: &'a ProjectRules) -> Self {
        Self { store, rules }
    }

    /// Validates `draft` and adds it as an active project.
    ///
    /// # Errors
    /// Returns the first rejected field; the store is left untouched.
    pub fn submit(&mut self, draft: &ProjectDraft) -> Result<ProjectId, ProjectValidationError> {
        draft.validate(self.rules)?;
        Ok(self.store.add_project(
            draft.title.as_str(),
            draft.description.as_str(),
            draft.people_count(),
        ))
    }

    /// Moves a project to any status.
    pub fn move_project(&mut self, id: ProjectId, status: ProjectStatus) -> MoveOutcome {
        self.store.move_project(id, status)
    }

    /// Drop onto the finished list.
    pub fn finish(&mut self, id: ProjectId) -> MoveOutcome {
        self.move_project(id, ProjectStatus::Finished)
    }

    /// Drop onto the active list.
    pub fn reactivate(&mut self, id: ProjectId) -> MoveOutcome {
        self.move_project(id, ProjectStatus::Active)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.store.subscribe(listener);
    }

    pub fn store(&self) -> &ProjectStore {
        &*self.store
    }
}
