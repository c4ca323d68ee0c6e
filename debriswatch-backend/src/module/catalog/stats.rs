//! Aggregation of a debris set into grouped counts.

use debriswatch_common::StatsSummary;

use super::altitude::estimate_altitude_km;
use super::types::RawCatalogRecord;

pub const BAND_LOW: &str = "Low (0-2000 km)";
pub const BAND_MEDIUM: &str = "Medium (2000-35000 km)";
pub const BAND_HIGH: &str = "High (35000+ km)";

const MEDIUM_FLOOR_KM: f64 = 2000.0;
const HIGH_FLOOR_KM: f64 = 35000.0;

/// Single-pass statistics over an already-filtered debris set.
///
/// Each record lands in exactly one country bucket and one type bucket.
/// The altitude tally only counts records with a defined altitude estimate,
/// so its total can be smaller than `total_debris` but never larger.
pub fn summarize(debris: &[RawCatalogRecord]) -> StatsSummary {
    let mut summary = StatsSummary {
        total_debris: debris.len(),
        ..Default::default()
    };

    for record in debris {
        *summary
            .by_country
            .entry(record.country_code())
            .or_insert(0) += 1;
        *summary.by_type.entry(record.type_label()).or_insert(0) += 1;

        if let Some(altitude) = estimate_altitude_km(record) {
            let band = if altitude < MEDIUM_FLOOR_KM {
                BAND_LOW
            } else if altitude < HIGH_FLOOR_KM {
                BAND_MEDIUM
            } else {
                BAND_HIGH
            };
            *summary.by_altitude.entry(band.to_string()).or_insert(0) += 1;
        }
    }

    summary
}
