//! Airport records, great-circle geometry and airport reports.
//!
//! Provides the immutable [`Airport`] value, distance and travel-time
//! estimation, a built-in sample dataset with JSON loading, and pure
//! report views with a separate text renderer.

pub mod dataset;
pub mod geo;
pub mod report;
pub mod types;

pub use dataset::{builtin_airports, find_by_id, load_airports, resolve_itinerary, tester_airports};
pub use geo::{
    estimated_travel_time_hours, great_circle_distance_km, leg_distances_km, total_distance_km,
    EARTH_RADIUS_KM,
};
pub use report::{render_text, AirportReport, ReportConfig, SortKey};
pub use types::{Airport, AirportError, GeoPoint};
