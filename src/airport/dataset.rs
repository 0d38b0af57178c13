//! Airport datasets: the built-in sample set and JSON files on disk.

use super::types::{Airport, AirportError, GeoPoint};
use std::fs;
use std::path::Path;

// ─── Built-in dataset ───────────────────────────────────────────

struct BuiltinAirport {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lon: f64,
    category: &'static str,
    elevation_feet: i32,
    city: &'static str,
    country_code: &'static str,
}

const BUILTIN_AIRPORTS: &[BuiltinAirport] = &[
    BuiltinAirport {
        id: "OMA", name: "Eppley Airfield", lat: 41.3030, lon: -95.8940,
        category: "normal", elevation_feet: 150, city: "Omaha", country_code: "US",
    },
    BuiltinAirport {
        id: "ORD", name: "O'Hare", lat: 41.9742, lon: -87.9073,
        category: "huge", elevation_feet: 125, city: "Chicago", country_code: "US",
    },
    BuiltinAirport {
        id: "YYZ", name: "Pearson", lat: 43.6, lon: -79.6,
        category: "large_airport", elevation_feet: 25, city: "Toronto", country_code: "CN",
    },
    BuiltinAirport {
        id: "LGA", name: "LaGuardia", lat: 40.7769, lon: -73.8740,
        category: "international", elevation_feet: 50, city: "New York", country_code: "US",
    },
    BuiltinAirport {
        id: "SYD", name: "Sydney Airport", lat: -33.9461, lon: 151.1772,
        category: "large_airport", elevation_feet: 21, city: "Sydney", country_code: "AU",
    },
    BuiltinAirport {
        id: "LHR", name: "Heathrow", lat: 51.4700, lon: -0.4543,
        category: "large_airport", elevation_feet: 83, city: "London", country_code: "GB",
    },
    BuiltinAirport {
        id: "KJFK", name: "John F. Kennedy International Airport", lat: 40.6413, lon: -73.7781,
        category: "large_airport", elevation_feet: 13, city: "Queens", country_code: "US",
    },
    BuiltinAirport {
        id: "KLAX", name: "Los Angeles International Airport", lat: 33.9416, lon: -118.4085,
        category: "large_airport", elevation_feet: 125, city: "Los Angeles", country_code: "US",
    },
];

/// The built-in sample airports, in their canonical listing order.
pub fn builtin_airports() -> Vec<Airport> {
    BUILTIN_AIRPORTS
        .iter()
        .map(|b| {
            Airport::new(
                b.id,
                b.name,
                GeoPoint::new(b.lat, b.lon),
                b.category,
                b.elevation_feet,
                b.city,
                b.country_code,
            )
        })
        .collect()
}

/// The three records of the distance/travel tester, as it builds them.
pub fn tester_airports() -> Vec<Airport> {
    vec![
        Airport::new(
            "KJFK",
            "John F. Kennedy International Airport",
            GeoPoint::new(40.6413, -73.7781),
            "large_airport",
            13,
            "Queens",
            "US",
        ),
        Airport::new(
            "KLAX",
            "Los Angeles International Airport",
            GeoPoint::new(33.9416, -118.4085),
            "large_airport",
            125,
            "Los Angeles",
            "US",
        ),
        Airport::new(
            "KORD",
            "O'Hare International Airport",
            GeoPoint::new(41.9742, -87.9073),
            "large_airport",
            672,
            "Chicago",
            "US",
        ),
    ]
}

// ─── JSON files ─────────────────────────────────────────────────

/// Load airports from a JSON array file.
///
/// Out-of-range coordinates are kept as given and reported as warnings.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>, AirportError> {
    let data = fs::read_to_string(path).map_err(|e| AirportError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let airports: Vec<Airport> = serde_json::from_str(&data).map_err(|e| AirportError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for a in airports.iter().filter(|a| !a.position().in_range()) {
        warn!(
            "{}: coordinates ({}, {}) are outside lat -90..90 / lon -180..180",
            a.id(),
            a.latitude(),
            a.longitude()
        );
    }
    debug!("loaded {} airports from {}", airports.len(), path.display());
    Ok(airports)
}

/// Case-insensitive lookup by airport id. Returns the first match.
pub fn find_by_id<'a>(airports: &'a [Airport], id: &str) -> Option<&'a Airport> {
    airports.iter().find(|a| a.id().eq_ignore_ascii_case(id))
}

/// Resolve an ordered list of ids into an itinerary.
pub fn resolve_itinerary<S: AsRef<str>>(airports: &[Airport], ids: &[S]) -> Result<Vec<Airport>, AirportError> {
    ids.iter()
        .map(|id| {
            find_by_id(airports, id.as_ref())
                .cloned()
                .ok_or_else(|| AirportError::NotFound(id.as_ref().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_airports() {
        let airports = builtin_airports();
        assert_eq!(airports.len(), 8);
        assert_eq!(airports[0].id(), "OMA");
        assert!(airports.iter().all(|a| a.position().in_range()));
    }

    #[test]
    fn test_tester_airports() {
        let trio = tester_airports();
        let ids: Vec<&str> = trio.iter().map(Airport::id).collect();
        assert_eq!(ids, ["KJFK", "KLAX", "KORD"]);

        let ord = &trio[2];
        assert_eq!(ord.name(), "O'Hare International Airport");
        assert_eq!(ord.category(), "large_airport");
        assert_eq!(ord.elevation_feet(), 672);
        assert_eq!(ord.city(), "Chicago");
        // same field as the report set, different record
        assert_ne!(Some(ord), find_by_id(&builtin_airports(), "ORD"));
    }

    #[test]
    fn test_find_by_id_case_insensitive() {
        let airports = builtin_airports();
        assert_eq!(find_by_id(&airports, "kjfk").unwrap().city(), "Queens");
        assert!(find_by_id(&airports, "ZZZZ").is_none());
    }

    #[test]
    fn test_resolve_itinerary() {
        let airports = builtin_airports();
        let stops = resolve_itinerary(&airports, &["KJFK", "ORD", "KLAX"]).unwrap();
        let ids: Vec<&str> = stops.iter().map(Airport::id).collect();
        assert_eq!(ids, ["KJFK", "ORD", "KLAX"]);

        match resolve_itinerary(&airports, &["KJFK", "NOPE"]) {
            Err(AirportError::NotFound(id)) => assert_eq!(id, "NOPE"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_airports_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("airports.json");
        let json = r#"[
            {"id": "KDEN", "name": "Denver International", "latitude": 39.8561, "longitude": -104.6737,
             "category": "large_airport", "elevation_feet": 5431, "city": "Denver", "country_code": "US"},
            {"id": "BAD", "name": "Off the map", "latitude": 123.0, "longitude": 0.0,
             "type": "closed", "city": "Nowhere", "country": "XX"}
        ]"#;
        fs::write(&path, json).unwrap();

        let airports = load_airports(&path).unwrap();
        assert_eq!(airports.len(), 2);
        assert_eq!(airports[0].elevation_feet(), 5431);
        // out-of-range entries are kept, missing elevation defaults to 0
        assert_eq!(airports[1].category(), "closed");
        assert_eq!(airports[1].elevation_feet(), 0);
        assert_eq!(airports[1].country_code(), "XX");
    }

    #[test]
    fn test_load_airports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_airports(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AirportError::Io { .. }));
    }

    #[test]
    fn test_load_airports_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("airports.json");
        fs::write(&path, r#"[{"id": "X"}]"#).unwrap();
        let err = load_airports(&path).unwrap_err();
        assert!(matches!(err, AirportError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid airport file"));
    }
}
