//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for school records.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewSchool::validate()` before
//!   persistence.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod school_repo;
