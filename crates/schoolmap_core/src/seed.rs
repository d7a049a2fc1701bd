//! Fixed seed data inserted on first initialization.
//!
//! # Responsibility
//! - Hold the canonical list of 25 named geographic points.
//!
//! # Invariants
//! - The list never changes at runtime; seeding is all-or-nothing and
//!   happens at most once per store.

use crate::model::school::NewSchool;

/// One entry of the fixed seed list.
#[derive(Debug, Clone, Copy)]
pub struct SeedRecord {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub city: &'static str,
    pub state: &'static str,
}

impl SeedRecord {
    /// Converts the static entry into an insertable record.
    pub fn to_new_school(self) -> NewSchool {
        NewSchool::new(
            self.name,
            self.latitude,
            self.longitude,
            Some(self.city.to_string()),
            Some(self.state.to_string()),
        )
    }
}

pub const SEED_SCHOOLS: &[SeedRecord] = &[
    SeedRecord { name: "Lincoln High School", latitude: 34.052235, longitude: -118.243683, city: "Los Angeles", state: "CA" },
    SeedRecord { name: "Roosevelt High School", latitude: 40.712776, longitude: -74.005974, city: "New York", state: "NY" },
    SeedRecord { name: "Washington High School", latitude: 41.878113, longitude: -87.629799, city: "Chicago", state: "IL" },
    SeedRecord { name: "Jefferson High School", latitude: 29.760427, longitude: -95.369804, city: "Houston", state: "TX" },
    SeedRecord { name: "Franklin High School", latitude: 33.448376, longitude: -112.074036, city: "Phoenix", state: "AZ" },
    SeedRecord { name: "Madison High School", latitude: 39.739236, longitude: -104.990251, city: "Denver", state: "CO" },
    SeedRecord { name: "Hamilton High School", latitude: 47.606209, longitude: -122.332069, city: "Seattle", state: "WA" },
    SeedRecord { name: "Adams High School", latitude: 32.776665, longitude: -96.796989, city: "Dallas", state: "TX" },
    SeedRecord { name: "Kennedy High School", latitude: 37.774929, longitude: -122.419418, city: "San Francisco", state: "CA" },
    SeedRecord { name: "Grant High School", latitude: 45.512230, longitude: -122.658722, city: "Portland", state: "OR" },
    SeedRecord { name: "Central High School", latitude: 39.952583, longitude: -75.165222, city: "Philadelphia", state: "PA" },
    SeedRecord { name: "Northview High School", latitude: 33.749001, longitude: -84.387978, city: "Atlanta", state: "GA" },
    SeedRecord { name: "Westview High School", latitude: 32.715736, longitude: -117.161087, city: "San Diego", state: "CA" },
    SeedRecord { name: "Eastview High School", latitude: 25.761681, longitude: -80.191788, city: "Miami", state: "FL" },
    SeedRecord { name: "Southridge High School", latitude: 38.627003, longitude: -90.199402, city: "St. Louis", state: "MO" },
    SeedRecord { name: "Riverside High School", latitude: 42.360081, longitude: -71.058884, city: "Boston", state: "MA" },
    SeedRecord { name: "Maple Grove High School", latitude: 44.977753, longitude: -93.265015, city: "Minneapolis", state: "MN" },
    SeedRecord { name: "Oak Ridge High School", latitude: 36.162663, longitude: -86.781601, city: "Nashville", state: "TN" },
    SeedRecord { name: "Pinecrest High School", latitude: 35.227085, longitude: -80.843124, city: "Charlotte", state: "NC" },
    SeedRecord { name: "Cedar Valley High School", latitude: 39.768402, longitude: -86.158066, city: "Indianapolis", state: "IN" },
    SeedRecord { name: "Hillside High School", latitude: 29.424122, longitude: -98.493629, city: "San Antonio", state: "TX" },
    SeedRecord { name: "Lakeside High School", latitude: 39.103119, longitude: -84.512016, city: "Cincinnati", state: "OH" },
    SeedRecord { name: "Valley View High School", latitude: 36.169941, longitude: -115.139832, city: "Las Vegas", state: "NV" },
    SeedRecord { name: "Summit High School", latitude: 45.815010, longitude: -122.678452, city: "Vancouver", state: "WA" },
    SeedRecord { name: "Brookside High School", latitude: 43.653225, longitude: -79.383186, city: "Toronto", state: "ON" },
];

#[cfg(test)]
mod tests {
    use super::SEED_SCHOOLS;
    use std::collections::HashSet;

    #[test]
    fn seed_contains_exactly_twenty_five_records() {
        assert_eq!(SEED_SCHOOLS.len(), 25);
    }

    #[test]
    fn seed_names_are_unique_and_valid() {
        let mut names = HashSet::new();
        for record in SEED_SCHOOLS {
            assert!(names.insert(record.name), "duplicate name {}", record.name);
            record.to_new_school().validate().unwrap();
        }
    }

    #[test]
    fn adams_is_first_alphabetically() {
        let min = SEED_SCHOOLS.iter().map(|record| record.name).min().unwrap();
        assert_eq!(min, "Adams High School");
    }

    #[test]
    fn kennedy_fixture_matches_known_coordinates() {
        let kennedy = SEED_SCHOOLS
            .iter()
            .find(|record| record.name == "Kennedy High School")
            .unwrap();
        assert!((kennedy.latitude - 37.774929).abs() < 1e-9);
        assert!((kennedy.longitude - -122.419418).abs() < 1e-9);
        assert_eq!(kennedy.city, "San Francisco");
        assert_eq!(kennedy.state, "CA");
    }
}
