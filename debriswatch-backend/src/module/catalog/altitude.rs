//! TLE-derived altitude estimation.

use std::f64::consts::PI;

use super::types::RawCatalogRecord;

/// Earth's standard gravitational parameter, km^3/s^2
pub const MU_EARTH_KM3_S2: f64 = 398_600.441_8;

/// Mean Earth radius, km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Estimate an object's altitude in kilometers from its mean motion.
///
/// Converts mean motion (revolutions/day) to an orbital period in seconds
/// and applies Kepler's third law to get the semi-major axis; altitude is
/// the semi-major axis minus the Earth radius, rounded to 2 decimal places.
///
/// The orbit is treated as circular and eccentricity is ignored, which is
/// intentional: the result is a rough teaching figure, not an ephemeris.
/// Returns `None` when mean motion is missing, zero, negative, or not a
/// finite number; a bad record never aborts the batch it came in.
pub fn estimate_altitude_km(record: &RawCatalogRecord) -> Option<f64> {
    let mean_motion = record.mean_motion?;
    if !mean_motion.is_finite() || mean_motion <= 0.0 {
        return None;
    }

    let period_s = (MINUTES_PER_DAY / mean_motion) * 60.0;
    let semi_major_axis = (MU_EARTH_KM3_S2 * (period_s / (2.0 * PI)).powi(2)).cbrt();
    let altitude = semi_major_axis - EARTH_RADIUS_KM;

    Some((altitude * 100.0).round() / 100.0)
}
