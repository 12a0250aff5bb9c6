//! Declarative field validation.
//!
//! # Responsibility
//! - Check one field value against optional constraints.
//!
//! # Invariants
//! - Validation is pure: no logging, no errors, only a verdict.

pub mod validator;
