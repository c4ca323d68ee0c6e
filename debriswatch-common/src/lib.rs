//! Shared API types for the DebrisWatch services.
//!
//! These are the wire shapes exchanged between the backend and any frontend:
//! normalized debris views, the listing and statistics response bodies, and
//! the object-detection boundary types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Simplified, read-only view of one tracked object.
///
/// Built once by the backend's normalizer and never mutated afterwards.
/// Optional fields stay `None` when the upstream catalog omitted the source
/// value or the derivation was not possible (e.g. altitude without a usable
/// mean motion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebrisView {
    /// Object name, `"Unknown"` when the catalog had none
    pub name: String,

    /// NORAD catalog number
    pub satellite_id: Option<u32>,

    /// Two-character registering-country code, `"UN"` when unknown
    pub country: String,

    /// Epoch timestamp string as reported by the catalog
    pub launch_epoch: Option<String>,

    /// Estimated altitude in km, rounded to 2 decimal places
    pub altitude_km: Option<f64>,

    /// Orbital inclination in degrees
    pub inclination: Option<f64>,

    /// Orbital period in minutes
    pub period_minutes: Option<f64>,

    /// Free-form type tag (e.g. "DEBRIS", "ROCKET BODY"), `"UNKNOWN"` when absent
    pub object_type: String,
}

/// Body of the debris listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisListing {
    /// Number of debris objects after classification (not capped)
    pub count: usize,

    /// Normalized debris views, capped by the server for payload size
    pub debris: Vec<DebrisView>,

    /// Size of the full catalog snapshot the debris was filtered from
    pub total_tracked: usize,
}

/// Aggregated debris statistics, recomputed per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_debris: usize,

    /// Count per two-character country code
    pub by_country: HashMap<String, usize>,

    /// Count per altitude band label; records without a defined altitude
    /// are absent from this tally
    pub by_altitude: HashMap<String, usize>,

    /// Count per raw object-type tag
    pub by_type: HashMap<String, usize>,
}

/// Axis-aligned bounding box in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// One detection produced by the object-detection collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: BoundingBox,
    pub class_id: u32,
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debris_view_roundtrips_through_json() {
        let view = DebrisView {
            name: "COSMOS 2251 DEB".to_string(),
            satellite_id: Some(34427),
            country: "19".to_string(),
            launch_epoch: Some("2024-01-01T00:00:00".to_string()),
            altitude_km: Some(774.12),
            inclination: Some(74.03),
            period_minutes: Some(100.4),
            object_type: "DEBRIS".to_string(),
        };

        let json = serde_json::to_string(&view).unwrap();
        let back: DebrisView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn stats_summary_serializes_expected_keys() {
        let mut summary = StatsSummary::default();
        summary.total_debris = 2;
        summary.by_country.insert("19".to_string(), 2);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_debris"], 2);
        assert_eq!(value["by_country"]["19"], 2);
        assert!(value["by_altitude"].as_object().unwrap().is_empty());
    }
}
