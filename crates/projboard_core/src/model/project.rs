//! Project record.
//!
//! # Responsibility
//! - Define the record kept by [`crate::ProjectStore`] and copied into
//!   snapshots.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reassigned.
//! - `status` is only written by the store's transition operation; consumers
//!   get read-only accessors.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque project identifier.
///
/// Random v4 UUIDs; uniqueness is probabilistic and never checked.
pub type ProjectId = Uuid;

/// Board category a project is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Newly added, still being worked on.
    Active,
    /// Moved to the finished list.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// One project as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub(crate) fn new(title: String, description: String, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned to the project.
    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Convenience for list renderers.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn new_project_starts_active_with_fresh_id() {
        let first = Project::new("Build API".to_string(), "REST endpoints".to_string(), 3);
        let second = Project::new("Build API".to_string(), "REST endpoints".to_string(), 3);

        assert_eq!(first.status(), ProjectStatus::Active);
        assert!(first.is_active());
        assert!(!first.id().is_nil());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn status_names_are_stable() {
        assert_eq!(ProjectStatus::Active.as_str(), "active");
        assert_eq!(ProjectStatus::Finished.as_str(), "finished");
    }
}
