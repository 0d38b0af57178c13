//! Great-circle distance and multi-leg travel-time estimation.
//!
//! Distances use the spherical law of cosines on a sphere of Earth's mean
//! radius. Accuracy is within ~0.5% of geodesic distances, which is plenty
//! for itinerary estimates.

use super::types::{Airport, GeoPoint};

/// Earth's mean radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points.
///
/// Symmetric bit-for-bit, and exactly 0.0 for identical points.
pub fn great_circle_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    // |Δλ| so that swapping the endpoints cannot change a single bit
    let delta_lambda = (b.longitude - a.longitude).abs().to_radians();

    let cos_theta = phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos();
    EARTH_RADIUS_KM * cos_theta.clamp(-1.0, 1.0).acos()
}

/// Distances of each consecutive leg, in stop order.
pub fn leg_distances_km(stops: &[Airport]) -> Vec<f64> {
    stops
        .windows(2)
        .map(|leg| leg[0].distance_to(&leg[1]))
        .collect()
}

/// Total flown distance across all legs.
pub fn total_distance_km(stops: &[Airport]) -> f64 {
    leg_distances_km(stops).iter().sum()
}

/// Estimated door-to-door hours for an ordered itinerary.
///
/// Fewer than two stops or a non-positive speed yields 0.0. Every
/// intermediate stop adds `avg_layover_hrs` when that is positive.
pub fn estimated_travel_time_hours(stops: &[Airport], avg_speed_kmh: f64, avg_layover_hrs: f64) -> f64 {
    if stops.len() < 2 || avg_speed_kmh <= 0.0 {
        return 0.0;
    }
    let mut hours = total_distance_km(stops) / avg_speed_kmh;
    let layovers = stops.len() - 2;
    if layovers > 0 && avg_layover_hrs > 0.0 {
        hours += layovers as f64 * avg_layover_hrs;
    }
    hours
}
