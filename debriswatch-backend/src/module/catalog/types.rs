use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Country code used when `OBJECT_ID` is absent or empty.
pub const UNKNOWN_COUNTRY: &str = "UN";

/// Type label used when `OBJECT_TYPE` is absent.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// One general-perturbations record from the catalog.
///
/// The upstream feed is open-ended JSON and none of these fields is
/// guaranteed to be present; absence deserializes to `None` instead of
/// failing the batch. Numeric fields are parsed leniently because the feed
/// has been observed to ship numbers as strings. Fields this service does
/// not consume are kept in `extra` so a cached snapshot carries the full
/// upstream payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCatalogRecord {
    #[serde(
        rename = "OBJECT_NAME",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub object_name: Option<String>,

    /// International designator; the first two characters encode the
    /// registering country
    #[serde(rename = "OBJECT_ID", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(
        rename = "NORAD_CAT_ID",
        default,
        deserialize_with = "lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub norad_cat_id: Option<u32>,

    #[serde(rename = "EPOCH", default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<String>,

    /// Revolutions per day
    #[serde(
        rename = "MEAN_MOTION",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub mean_motion: Option<f64>,

    /// Degrees
    #[serde(
        rename = "INCLINATION",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub inclination: Option<f64>,

    /// Minutes
    #[serde(
        rename = "PERIOD",
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub period: Option<f64>,

    /// Free-form tag, e.g. "PAYLOAD", "ROCKET BODY", "DEBRIS"
    #[serde(
        rename = "OBJECT_TYPE",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub object_type: Option<String>,

    /// Everything else the upstream record carried
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl RawCatalogRecord {
    /// Two-character registering-country code derived from `OBJECT_ID`,
    /// `"UN"` when the id is absent or empty.
    pub fn country_code(&self) -> String {
        match self.object_id.as_deref() {
            Some(id) if !id.is_empty() => id.chars().take(2).collect(),
            _ => UNKNOWN_COUNTRY.to_string(),
        }
    }

    /// Raw object-type tag, `"UNKNOWN"` when absent.
    pub fn type_label(&self) -> String {
        self.object_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string())
    }
}

/// On-disk cache document: one full catalog snapshot plus the instant it
/// was fetched. Always replaced wholesale, never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEnvelope {
    pub timestamp: DateTime<Utc>,
    pub data: Vec<RawCatalogRecord>,
}

impl CacheEnvelope {
    pub fn new(data: Vec<RawCatalogRecord>) -> Self {
        Self {
            timestamp: Utc::now(),
            data,
        }
    }

    /// Whether the snapshot is younger than `max_age`.
    pub fn is_fresh(&self, max_age: Duration) -> bool {
        Utc::now().signed_duration_since(self.timestamp) < max_age
    }
}

/// Accepts a JSON number, a numeric string, or anything else (mapped to
/// `None`) where a float is expected.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

/// Same leniency for catalog numbers.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) => u32::try_from(n).ok(),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_typical_catalog_record() {
        let json = r#"{
            "OBJECT_NAME": "COSMOS 2251 DEB",
            "OBJECT_ID": "1993-036AXX",
            "NORAD_CAT_ID": 34427,
            "EPOCH": "2024-03-10T11:22:33.000000",
            "MEAN_MOTION": 14.31,
            "INCLINATION": 74.03,
            "PERIOD": 100.62,
            "OBJECT_TYPE": "DEBRIS",
            "ECCENTRICITY": 0.0056
        }"#;

        let record: RawCatalogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.object_name.as_deref(), Some("COSMOS 2251 DEB"));
        assert_eq!(record.norad_cat_id, Some(34427));
        assert_eq!(record.mean_motion, Some(14.31));
        assert_eq!(record.country_code(), "19");
        assert_eq!(record.type_label(), "DEBRIS");
        // unconsumed fields ride along
        assert!(record.extra.contains_key("ECCENTRICITY"));
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let record: RawCatalogRecord = serde_json::from_str("{}").unwrap();
        assert!(record.object_name.is_none());
        assert!(record.mean_motion.is_none());
        assert_eq!(record.country_code(), "UN");
        assert_eq!(record.type_label(), "UNKNOWN");
    }

    #[test]
    fn numeric_fields_accept_strings() {
        let json = r#"{"MEAN_MOTION": "15.5", "NORAD_CAT_ID": "25544"}"#;
        let record: RawCatalogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mean_motion, Some(15.5));
        assert_eq!(record.norad_cat_id, Some(25544));
    }

    #[test]
    fn non_numeric_mean_motion_becomes_none() {
        let json = r#"{"MEAN_MOTION": "n/a"}"#;
        let record: RawCatalogRecord = serde_json::from_str(json).unwrap();
        assert!(record.mean_motion.is_none());
    }

    #[test]
    fn envelope_freshness_window() {
        let mut envelope = CacheEnvelope::new(Vec::new());
        assert!(envelope.is_fresh(Duration::hours(6)));

        envelope.timestamp = Utc::now() - Duration::hours(7);
        assert!(!envelope.is_fresh(Duration::hours(6)));
    }
}
