//! Domain model for school location records.
//!
//! # Responsibility
//! - Define the canonical record shape persisted in the `Schools` table.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every persisted record is identified by a stable `SchoolId`.
//! - Records are append-only; no update or delete paths exist.

pub mod school;
