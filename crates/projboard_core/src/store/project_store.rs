//! Project store.
//!
//! # Responsibility
//! - Hold all projects in insertion order.
//! - Apply `add_project` and `move_project`, then notify subscribers.
//!
//! # Invariants
//! - Every accepted mutation notifies each subscriber exactly once, in
//!   subscription order, with an independent copy of all projects.
//! - Moving an unknown id or moving to the current status changes nothing
//!   and notifies nobody.
//! - New subscribers are not back-filled with current state.
//! - Inputs are not re-validated; callers validate drafts first.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::listeners::ListenerList;
use log::debug;

/// Result of a `move_project` call.
///
/// None of these is an error; they exist so callers and tests can tell
/// whether a notification went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and subscribers were notified.
    Moved,
    /// No project with that id; nothing happened.
    NotFound,
    /// Project already had the requested status; nothing happened.
    Unchanged,
}

/// Reactive in-memory store of projects.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: ListenerList<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new active project and notifies subscribers.
    ///
    /// Returns the generated id. The project is part of the snapshot every
    /// subscriber receives before this call returns.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title.into(), description.into(), people);
        let id = project.id();
        self.projects.push(project);

        debug!(
            "event=project_added module=store status=ok id={} people={} total={}",
            id,
            people,
            self.projects.len()
        );
        self.notify();
        id
    }

    /// Moves a project to `new_status`.
    ///
    /// Unknown ids and same-status moves are tolerated silently.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|project| project.id() == id) else {
            debug!(
                "event=project_move_skipped module=store status=noop id={} reason=not_found",
                id
            );
            return MoveOutcome::NotFound;
        };

        if project.status() == new_status {
            debug!(
                "event=project_move_skipped module=store status=noop id={} reason=same_status",
                id
            );
            return MoveOutcome::Unchanged;
        }

        let previous = project.status();
        project.set_status(new_status);
        debug!(
            "event=project_moved module=store status=ok id={} from={} to={}",
            id,
            previous.as_str(),
            new_status.as_str()
        );
        self.notify();
        MoveOutcome::Moved
    }

    /// Registers `listener` for every future snapshot.
    ///
    /// The listener is not called with current state.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.add(listener);
        debug!(
            "event=listener_added module=store status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Read-only view of all projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Projects with `status`, in insertion order.
    pub fn by_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(move |project| project.status() == status)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        self.listeners.notify(&self.projects);
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveOutcome, ProjectStore};
    use crate::model::project::ProjectStatus;
    use uuid::Uuid;

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = ProjectStore::new();
        let first = store.add_project("One", "first project", 1);
        let second = store.add_project("Two", "second project", 2);

        let ids: Vec<_> = store.projects().iter().map(|project| project.id()).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn move_reports_outcome() {
        let mut store = ProjectStore::new();
        let id = store.add_project("One", "first project", 1);

        assert_eq!(
            store.move_project(Uuid::new_v4(), ProjectStatus::Finished),
            MoveOutcome::NotFound
        );
        assert_eq!(
            store.move_project(id, ProjectStatus::Active),
            MoveOutcome::Unchanged
        );
        assert_eq!(
            store.move_project(id, ProjectStatus::Finished),
            MoveOutcome::Moved
        );
        assert_eq!(
            store.get(id).map(|project| project.status()),
            Some(ProjectStatus::Finished)
        );
    }

    #[test]
    fn by_status_filters_without_reordering() {
        let mut store = ProjectStore::new();
        let a = store.add_project("A", "project a", 1);
        let b = store.add_project("B", "project b", 1);
        let c = store.add_project("C", "project c", 1);
        store.move_project(b, ProjectStatus::Finished);

        let active: Vec<_> = store
            .by_status(ProjectStatus::Active)
            .map(|project| project.id())
            .collect();
        assert_eq!(active, vec![a, c]);
        assert_eq!(store.by_status(ProjectStatus::Finished).count(), 1);
    }
}
