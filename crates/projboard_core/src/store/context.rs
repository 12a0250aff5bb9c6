//! Process-level board context.
//!
//! # Responsibility
//! - Own the one project store of the process and create it on first use.
//! - Hand out the store and the admission rules to adapters.
//!
//! # Invariants
//! - At most one store exists per context; it lives as long as the context.
//! - Hosts create one context at startup and pass it by reference.

use crate::config::{ProjectRules, RulesError};
use crate::service::board_service::ProjectBoard;
use crate::store::project_store::ProjectStore;
use log::debug;

/// Owner of the lazily created [`ProjectStore`].
#[derive(Default)]
pub struct BoardContext {
    rules: ProjectRules,
    store: Option<ProjectStore>,
}

impl BoardContext {
    /// Creates a context with default admission rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with custom admission rules.
    pub fn with_rules(rules: ProjectRules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self { rules, store: None })
    }

    pub fn rules(&self) -> &ProjectRules {
        &self.rules
    }

    /// Returns the store, creating it on the first call.
    pub fn store(&mut self) -> &mut ProjectStore {
        self.store.get_or_insert_with(create_store)
    }

    pub fn is_store_created(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the adapter-facing board over the shared store.
    pub fn board(&mut self) -> ProjectBoard<'_> {
        let store = self.store.get_or_insert_with(create_store);
        ProjectBoard::new(store, &self.rules)
    }
}

fn create_store() -> ProjectStore {
    debug!("event=store_created module=context status=ok");
    ProjectStore::new()
}

#[cfg(test)]
mod tests {
    use super::BoardContext;
    use crate::config::{ProjectRules, RulesError};

    #[test]
    fn store_is_created_lazily_and_reused() {
        let mut context = BoardContext::new();
        assert!(!context.is_store_created());

        let id = context.store().add_project("Build API", "REST endpoints", 3);
        assert!(context.is_store_created());
        assert!(context.store().get(id).is_some());
        assert_eq!(context.board().store().len(), 1);
    }

    #[test]
    fn with_rules_rejects_invalid_rules() {
        let rules = ProjectRules {
            people_min: 0,
            ..ProjectRules::default()
        };
        assert!(matches!(
            BoardContext::with_rules(rules),
            Err(RulesError::ZeroPeopleMin)
        ));
    }
}
