//! Core types for the airport subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A point on the globe in signed decimal degrees.
///
/// Ranges are not enforced: callers supply valid data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// An airport record as found in the ICAO/GPS databases.
///
/// Fields are fixed at construction; there are no mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    id: String,
    name: String,
    #[serde(flatten)]
    position: GeoPoint,
    #[serde(alias = "type")]
    category: String,
    #[serde(default)]
    elevation_feet: i32,
    city: String,
    #[serde(alias = "country")]
    country_code: String,
}

impl Airport {
    /// Build an airport. Argument order: identity, name, position,
    /// category, elevation, city, country code.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: GeoPoint,
        category: impl Into<String>,
        elevation_feet: i32,
        city: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            category: category.into(),
            elevation_feet,
            city: city.into(),
            country_code: country_code.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn latitude(&self) -> f64 {
        self.position.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn elevation_feet(&self) -> i32 {
        self.elevation_feet
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Great-circle distance in kilometres to `other`.
    pub fn distance_to(&self, other: &Airport) -> f64 {
        super::geo::great_circle_distance_km(self.position, other.position)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<14} {:<40} {:7.2} {:7.2} {} {} {}",
            self.id,
            self.category,
            self.name,
            self.position.latitude,
            self.position.longitude,
            self.elevation_feet,
            self.city,
            self.country_code
        )
    }
}

/// Airport dataset errors.
#[derive(Debug)]
pub enum AirportError {
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
    NotFound(String),
}

impl fmt::Display for AirportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "Cannot read airport file '{}': {}", path.display(), message)
            }
            Self::Parse { path, message } => {
                write!(f, "Invalid airport file '{}': {}", path.display(), message)
            }
            Self::NotFound(id) => write!(f, "Airport not found: '{}'", id),
        }
    }
}

impl std::error::Error for AirportError {}
