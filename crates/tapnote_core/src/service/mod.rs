//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and persistence side effects behind one
//!   owner, keeping UI layers decoupled from storage details.

pub mod notes_service;
