//! School repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide append-and-read APIs over the `Schools` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The table is append-only; no update or delete statements exist.
//! - `list_all_by_name` orders by `Name` ascending under the default
//!   BINARY collation.

use crate::db::DbError;
use crate::model::school::{NewSchool, SchoolId, SchoolLocation, SchoolValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SCHOOL_SELECT_SQL: &str = "SELECT
    Id,
    Name,
    Latitude,
    Longitude,
    City,
    State
FROM Schools";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for school persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(SchoolValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted school data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<SchoolValidationError> for RepoError {
    fn from(value: SchoolValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for school records.
pub trait SchoolRepository {
    /// Inserts one record and returns the id assigned by the store.
    fn insert_school(&self, school: &NewSchool) -> RepoResult<SchoolId>;
    /// Returns the total number of persisted records.
    fn count_schools(&self) -> RepoResult<i64>;
    /// Returns all records ordered by name ascending.
    fn list_all_by_name(&self) -> RepoResult<Vec<SchoolLocation>>;
}

/// SQLite-backed school repository borrowing an open connection.
///
/// `rusqlite::Transaction` derefs to `Connection`, so callers can run
/// the same repository inside a transaction for atomic batch inserts.
pub struct SqliteSchoolRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSchoolRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SchoolRepository for SqliteSchoolRepository<'_> {
    fn insert_school(&self, school: &NewSchool) -> RepoResult<SchoolId> {
        school.validate()?;

        self.conn.execute(
            "INSERT INTO Schools (Name, Latitude, Longitude, City, State)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                school.name.as_str(),
                school.latitude,
                school.longitude,
                school.city.as_deref(),
                school.state.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn count_schools(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(1) FROM Schools;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        Ok(count)
    }

    fn list_all_by_name(&self) -> RepoResult<Vec<SchoolLocation>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SCHOOL_SELECT_SQL} ORDER BY Name;"))?;

        let mut rows = stmt.query([])?;
        let mut schools = Vec::new();

        while let Some(row) = rows.next()? {
            schools.push(parse_school_row(row)?);
        }

        Ok(schools)
    }
}

fn parse_school_row(row: &Row<'_>) -> RepoResult<SchoolLocation> {
    let name: String = row.get("Name")?;
    if name.trim().is_empty() {
        return Err(RepoError::InvalidData(
            "empty value in Schools.Name".to_string(),
        ));
    }

    let latitude: f64 = row.get("Latitude")?;
    let longitude: f64 = row.get("Longitude")?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(RepoError::InvalidData(format!(
            "non-finite coordinates ({latitude}, {longitude}) for `{name}`"
        )));
    }

    Ok(SchoolLocation {
        id: row.get("Id")?,
        name,
        latitude,
        longitude,
        city: row.get("City")?,
        state: row.get("State")?,
    })
}
