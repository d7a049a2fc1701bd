//! Local persistence for named school locations.
//! This crate is the single source of truth for the school store's
//! schema, seed data, and access invariants.

pub mod cancel;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod store;

pub use cancel::CancellationToken;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::school::{NewSchool, SchoolId, SchoolLocation, SchoolValidationError};
pub use repo::school_repo::{RepoError, RepoResult, SchoolRepository, SqliteSchoolRepository};
pub use seed::{SeedRecord, SEED_SCHOOLS};
pub use store::{default_db_path, LocationStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
