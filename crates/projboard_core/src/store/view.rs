//! Per-status list view fed by store snapshots.
//!
//! The subscription closure captures the view's shared storage, so it always
//! updates this view no matter who invokes it.

use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::ProjectStore;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Filtered list of the projects in one status, refreshed on every
/// notification.
#[derive(Debug, Clone)]
pub struct CategoryView {
    status: ProjectStatus,
    items: Rc<RefCell<Vec<Project>>>,
    renders: Rc<Cell<usize>>,
}

impl CategoryView {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            items: Rc::new(RefCell::new(Vec::new())),
            renders: Rc::new(Cell::new(0)),
        }
    }

    /// Subscribes this view to `store`.
    ///
    /// The view stays empty until the next mutation.
    pub fn attach(&self, store: &mut ProjectStore) {
        let status = self.status;
        let items = Rc::clone(&self.items);
        let renders = Rc::clone(&self.renders);
        store.subscribe(move |snapshot| {
            let filtered: Vec<Project> = snapshot
                .into_iter()
                .filter(|project| project.status() == status)
                .collect();
            *items.borrow_mut() = filtered;
            renders.set(renders.get() + 1);
        });
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Copy of the last rendered items.
    pub fn items(&self) -> Vec<Project> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Number of snapshots this view has received.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}
