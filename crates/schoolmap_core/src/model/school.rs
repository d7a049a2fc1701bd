//! School location domain model.
//!
//! # Responsibility
//! - Define the persisted `SchoolLocation` entity and the unpersisted
//!   `NewSchool` insert shape.
//! - Validate required fields before they reach SQL.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never reassigned.
//! - `name`, `latitude`, `longitude` are always present; `city` and
//!   `state` may be absent.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable row identifier assigned by the store on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SchoolId = i64;

/// A named geographic point as persisted in the `Schools` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolLocation {
    /// Auto-increment primary key, stable for the record lifetime.
    pub id: SchoolId,
    /// Display name, non-empty.
    pub name: String,
    /// Decimal degrees, WGS84.
    pub latitude: f64,
    /// Decimal degrees, WGS84.
    pub longitude: f64,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Insert shape for a school record before an id exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Validation failures for school records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchoolValidationError {
    EmptyName,
    NonFiniteCoordinate { field: &'static str },
}

impl Display for SchoolValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "school name must not be empty"),
            Self::NonFiniteCoordinate { field } => {
                write!(f, "school {field} must be a finite number")
            }
        }
    }
}

impl Error for SchoolValidationError {}

impl NewSchool {
    /// Creates an insert shape with optional city/state metadata.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        city: Option<String>,
        state: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            city,
            state,
        }
    }

    /// Checks required-field invariants before persistence.
    ///
    /// # Errors
    /// - `EmptyName` when the name is empty after trimming.
    /// - `NonFiniteCoordinate` when latitude or longitude is NaN or
    ///   infinite. No range validation is performed beyond finiteness.
    pub fn validate(&self) -> Result<(), SchoolValidationError> {
        if self.name.trim().is_empty() {
            return Err(SchoolValidationError::EmptyName);
        }
        if !self.latitude.is_finite() {
            return Err(SchoolValidationError::NonFiniteCoordinate { field: "latitude" });
        }
        if !self.longitude.is_finite() {
            return Err(SchoolValidationError::NonFiniteCoordinate { field: "longitude" });
        }
        Ok(())
    }
}
