//! Project domain model.
//!
//! # Responsibility
//! - Define the project record shared with renderers through snapshots.
//! - Define the unvalidated draft gathered from the input form.
//!
//! # Invariants
//! - Every project is identified by an `id` that never changes.
//! - Projects are never deleted; only their status moves.

pub mod draft;
pub mod project;
