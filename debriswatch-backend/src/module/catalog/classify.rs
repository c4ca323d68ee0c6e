//! Debris classification over free-text catalog fields.

use tracing::warn;

use super::types::RawCatalogRecord;

/// Whether a record looks like space junk rather than an active payload.
///
/// Case-insensitive substring heuristic over `OBJECT_TYPE` and
/// `OBJECT_NAME`. The catalog's type tags are free text, so ambiguous names
/// can misclassify either way; that is accepted, not a bug.
pub fn is_debris(record: &RawCatalogRecord) -> bool {
    let object_type = record
        .object_type
        .as_deref()
        .unwrap_or("")
        .to_uppercase();
    let name = record.object_name.as_deref().unwrap_or("").to_uppercase();

    object_type.contains("DEBRIS")
        || object_type.contains("ROCKET BODY")
        || object_type.contains("DEB")
        || name.contains("DEB")
        || name.contains("R/B")
}

/// Filter a snapshot down to debris.
///
/// If nothing matches on a non-empty input, the whole unfiltered snapshot is
/// returned instead of an empty set, so the endpoints always have something
/// to show.
pub fn filter_debris(records: &[RawCatalogRecord]) -> Vec<RawCatalogRecord> {
    let debris: Vec<RawCatalogRecord> = records
        .iter()
        .filter(|record| is_debris(record))
        .cloned()
        .collect();

    if debris.is_empty() && !records.is_empty() {
        warn!(
            "No debris matched among {} records, falling back to the full set",
            records.len()
        );
        return records.to_vec();
    }

    debris
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(object_type: Option<&str>, name: Option<&str>) -> RawCatalogRecord {
        RawCatalogRecord {
            object_type: object_type.map(str::to_string),
            object_name: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn matches_each_substring_rule() {
        assert!(is_debris(&record(Some("DEBRIS"), None)));
        assert!(is_debris(&record(Some("ROCKET BODY"), None)));
        assert!(is_debris(&record(Some("TBA - DEB?"), None)));
        assert!(is_debris(&record(None, Some("COSMOS 2251 DEB"))));
        assert!(is_debris(&record(None, Some("ARIANE 5 R/B"))));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_debris(&record(Some("debris"), None)));
        assert!(is_debris(&record(None, Some("ariane r/b"))));
    }

    #[test]
    fn payloads_are_not_debris() {
        assert!(!is_debris(&record(Some("PAYLOAD"), Some("STARLINK-3041"))));
        assert!(!is_debris(&record(None, None)));
    }

    #[test]
    fn filter_keeps_only_matches() {
        let records = vec![
            record(Some("DEBRIS"), Some("SL-16 FRAGMENT")),
            record(Some("PAYLOAD"), Some("ISS (ZARYA)")),
            record(Some("ROCKET BODY"), Some("CZ-4B R/B")),
        ];

        let debris = filter_debris(&records);
        assert_eq!(debris.len(), 2);
        assert!(debris.iter().all(is_debris));
    }

    #[test]
    fn empty_match_falls_back_to_full_set() {
        let records = vec![
            record(Some("PAYLOAD"), Some("STARLINK-1000")),
            record(Some("PAYLOAD"), Some("ONEWEB-0001")),
        ];

        let debris = filter_debris(&records);
        assert_eq!(debris.len(), records.len());
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter_debris(&[]).is_empty());
    }
}
