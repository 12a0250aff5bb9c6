//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store mutations into adapter-level APIs.
//! - Keep renderers decoupled from admission rules.

pub mod board_service;
