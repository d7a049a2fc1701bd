//! Location store orchestration over the school repository.
//!
//! # Responsibility
//! - Own the resolved database path and the initialize/read use cases.
//! - Guard the one-time seed with a row-count check inside one
//!   transaction.
//!
//! # Invariants
//! - `initialize` is idempotent: a store that already holds rows is
//!   never re-seeded, merged, or deduplicated.
//! - A crash or cancellation mid-seed leaves zero or all seed rows,
//!   never a partial set.
//! - Every operation opens its own scoped connection and releases it on
//!   all exit paths.

use crate::cancel::CancellationToken;
use crate::db::{open_db, open_db_raw, DbError};
use crate::model::school::SchoolLocation;
use crate::repo::school_repo::{RepoError, SchoolRepository, SqliteSchoolRepository};
use crate::seed::SEED_SCHOOLS;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by store operations.
///
/// No retries and no local recovery: every failure propagates to the
/// caller, who decides what is user-visible.
#[derive(Debug)]
pub enum StoreError {
    /// The containing directory could not be created.
    Io(std::io::Error),
    /// The database could not be opened, or a schema/query statement
    /// failed at the storage-engine level.
    Db(DbError),
    /// Persistence-layer failure during seeding or row mapping.
    Repo(RepoError),
    /// The caller-supplied cancellation token fired before completion.
    Cancelled,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Cancelled => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Default database path following platform conventions.
///
/// - Linux: `~/.local/share/schoolmap/schools.db`
/// - macOS: `~/Library/Application Support/schoolmap/schools.db`
/// - Windows: `C:\Users\<user>\AppData\Local\schoolmap\schools.db`
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("schoolmap")
        .join("schools.db")
}

/// Store handle over the school database at one resolved path.
///
/// Constructed explicitly by the caller; there is no ambient static
/// state. The handle itself holds no connection, each operation opens
/// and releases its own.
#[derive(Debug, Clone)]
pub struct LocationStore {
    db_path: PathBuf,
}

impl LocationStore {
    /// Creates a store handle for a caller-resolved database path.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Creates a store handle at the platform default path.
    pub fn open_default() -> Self {
        Self::new(default_db_path())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Ensures the database exists, the schema is applied, and the seed
    /// rows are present.
    ///
    /// Safe to call repeatedly: when the `Schools` table already holds
    /// at least one row the seed step is skipped entirely. The seed
    /// insert runs inside a single transaction, so an interrupted first
    /// run leaves zero visible rows.
    ///
    /// Single-caller-at-startup is the assumed usage; the count guard
    /// is not a cross-process lock.
    ///
    /// # Errors
    /// - `Io` when the containing directory cannot be created.
    /// - `Db` when the database cannot be opened or migrated.
    /// - `Repo` when a seed insert fails; nothing is committed.
    /// - `Cancelled` when the token fires before commit.
    pub fn initialize(&self, cancel: &CancellationToken) -> StoreResult<()> {
        ensure_active(cancel)?;

        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        ensure_active(cancel)?;
        let mut conn = open_db(&self.db_path)?;

        ensure_active(cancel)?;
        let existing = SqliteSchoolRepository::new(&conn).count_schools()?;
        if existing > 0 {
            info!(
                "event=store_init module=store status=ok seeded=false rows={existing}"
            );
            return Ok(());
        }

        let tx = conn.transaction().map_err(DbError::from)?;
        {
            let repo = SqliteSchoolRepository::new(&tx);
            for record in SEED_SCHOOLS {
                ensure_active(cancel)?;
                repo.insert_school(&record.to_new_school())?;
            }
        }

        // Dropping an uncommitted transaction rolls it back, including
        // on the cancellation path above.
        ensure_active(cancel)?;
        tx.commit().map_err(DbError::from)?;

        info!(
            "event=store_init module=store status=ok seeded=true rows={}",
            SEED_SCHOOLS.len()
        );
        Ok(())
    }

    /// Returns all records ordered by name ascending.
    ///
    /// The result is a snapshot at query time; no cursor outlives the
    /// call. The connection is opened without schema bootstrap, so a
    /// store whose `initialize` never ran fails with a missing-table
    /// error rather than silently creating the schema.
    ///
    /// # Errors
    /// - `Db` when the database cannot be opened or the query fails.
    /// - `Repo` when a persisted row is invalid.
    /// - `Cancelled` when the token fires before the query runs.
    pub fn get_all(&self, cancel: &CancellationToken) -> StoreResult<Vec<SchoolLocation>> {
        ensure_active(cancel)?;
        let conn = open_db_raw(&self.db_path)?;

        ensure_active(cancel)?;
        let schools = SqliteSchoolRepository::new(&conn).list_all_by_name()?;
        Ok(schools)
    }
}

fn ensure_active(cancel: &CancellationToken) -> StoreResult<()> {
    if cancel.is_cancelled() {
        return Err(StoreError::Cancelled);
    }
    Ok(())
}
