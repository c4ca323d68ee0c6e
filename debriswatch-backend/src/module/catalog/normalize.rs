//! Projection of raw catalog records into the simplified view model.

use debriswatch_common::DebrisView;

use super::altitude::estimate_altitude_km;
use super::types::RawCatalogRecord;

/// Project one raw record into its immutable view.
///
/// Every field is optional upstream, so the projection is total: absent
/// values map to documented defaults and a missing mean motion leaves the
/// altitude unset rather than failing.
pub fn normalize_record(record: &RawCatalogRecord) -> DebrisView {
    DebrisView {
        name: record
            .object_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        satellite_id: record.norad_cat_id,
        country: record.country_code(),
        launch_epoch: record.epoch.clone(),
        altitude_km: estimate_altitude_km(record),
        inclination: record.inclination,
        period_minutes: record.period,
        object_type: record.type_label(),
    }
}

/// Project a whole snapshot, preserving order.
pub fn normalize_records(records: &[RawCatalogRecord]) -> Vec<DebrisView> {
    records.iter().map(normalize_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_all_consumed_fields() {
        let record = RawCatalogRecord {
            object_name: Some("COSMOS 2251 DEB".to_string()),
            object_id: Some("1993-036AXX".to_string()),
            norad_cat_id: Some(34427),
            epoch: Some("2024-03-10T11:22:33".to_string()),
            mean_motion: Some(15.0),
            inclination: Some(74.03),
            period: Some(96.0),
            object_type: Some("DEBRIS".to_string()),
            ..Default::default()
        };

        let view = normalize_record(&record);
        assert_eq!(view.name, "COSMOS 2251 DEB");
        assert_eq!(view.satellite_id, Some(34427));
        assert_eq!(view.country, "19");
        assert_eq!(view.launch_epoch.as_deref(), Some("2024-03-10T11:22:33"));
        assert_eq!(view.altitude_km, Some(574.03));
        assert_eq!(view.inclination, Some(74.03));
        assert_eq!(view.period_minutes, Some(96.0));
        assert_eq!(view.object_type, "DEBRIS");
    }

    #[test]
    fn empty_record_gets_defaults() {
        let view = normalize_record(&RawCatalogRecord::default());
        assert_eq!(view.name, "Unknown");
        assert_eq!(view.country, "UN");
        assert_eq!(view.object_type, "UNKNOWN");
        assert!(view.satellite_id.is_none());
        assert!(view.altitude_km.is_none());
    }

    #[test]
    fn batch_projection_preserves_order() {
        let records = vec![
            RawCatalogRecord {
                object_name: Some("A".to_string()),
                ..Default::default()
            },
            RawCatalogRecord {
                object_name: Some("B".to_string()),
                ..Default::default()
            },
        ];

        let views = normalize_records(&records);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "A");
        assert_eq!(views[1].name, "B");
    }
}
