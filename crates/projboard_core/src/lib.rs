//! Core domain logic for the project board.
//! This crate is the single source of truth for project state and admission
//! rules; renderers only ever see snapshots.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use config::{ProjectRules, RulesError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{ProjectDraft, ProjectField, ProjectValidationError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use service::board_service::ProjectBoard;
pub use store::context::BoardContext;
pub use store::listeners::ListenerList;
pub use store::project_store::{MoveOutcome, ProjectStore};
pub use store::view::CategoryView;
pub use validation::validator::{validate, FieldValue, Validatable};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
