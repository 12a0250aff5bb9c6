//! Reactive project state.
//!
//! # Responsibility
//! - Own the ordered project sequence and the subscriber list.
//! - Fan out an independent snapshot to every subscriber after each
//!   accepted mutation.
//! - Provide the per-process context that lazily creates the store.
//!
//! # Invariants
//! - Consumers never hold a mutable reference into store state.
//! - Notification is synchronous and completes before the mutating call
//!   returns.

pub mod context;
pub mod listeners;
pub mod project_store;
pub mod view;
