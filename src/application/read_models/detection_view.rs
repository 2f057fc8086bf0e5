//! Display model for a detection definition
//!
//! Merges the parsed YAML document with the audit envelope the way the
//! detail page shows it: every key the author wrote survives for
//! round-trip editing, while `filters` and `dimensionExploration` are
//! replaced by their normalized list form.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Serialize;
use serde_yaml_ng::{Mapping, Value};

use crate::ports::outbound::DetectionEnvelope;
use crate::shared::{AlertDetailError, Result};

/// Normalized view of one detection definition.
///
/// `document` carries the parsed YAML with its original keys; the derived
/// fields come from the response envelope. Immutable once assembled.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionView {
    #[serde(flatten)]
    pub document: Mapping,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
    #[serde(rename = "updatedBy")]
    pub updated_by: Option<String>,
    #[serde(rename = "exploreDimensions")]
    pub explore_dimensions: Vec<String>,
    pub filters: Vec<String>,
    #[serde(rename = "dimensionExploration")]
    pub dimension_exploration: Vec<String>,
    #[serde(rename = "lastDetectionTime")]
    pub last_detection_time: Option<String>,
}

impl DetectionView {
    /// Builds the view from a detection envelope.
    ///
    /// Returns `Ok(None)` when the envelope carries no yaml text; the
    /// detail page simply shows nothing in that case. A yaml parse
    /// failure is an error; the caller reports it and leaves the
    /// detection unset.
    pub fn from_envelope(alert_id: &str, envelope: &DetectionEnvelope) -> Result<Option<Self>> {
        let Some(raw_yaml) = envelope.yaml.as_deref() else {
            return Ok(None);
        };

        let mut document: Mapping =
            serde_yaml_ng::from_str(raw_yaml).map_err(|e| AlertDetailError::YamlParse {
                alert_id: alert_id.to_string(),
                details: e.to_string(),
            })?;

        // The normalized lists replace the raw keys in the retained
        // document; the raw text keeps the original spelling anyway.
        let filters = normalize_filter(document.remove("filters").as_ref());
        let dimension_exploration =
            normalize_filter(document.remove("dimensionExploration").as_ref());

        let last_detection_time = envelope
            .last_timestamp
            .as_ref()
            .and_then(format_last_detection);

        Ok(Some(Self {
            document,
            is_active: envelope.active,
            created_by: envelope.created_by.clone(),
            updated_by: envelope.updated_by.clone(),
            explore_dimensions: envelope.dimensions.clone(),
            filters,
            dimension_exploration,
            last_detection_time,
        }))
    }
}

/// Canonicalizes a yaml filter value into a list of display strings.
///
/// Accepts whatever shape the author wrote: absent and null become the
/// empty list, a scalar becomes a one-element list, a sequence keeps its
/// items, and a mapping renders one `key=values` entry per key.
pub(crate) fn normalize_filter(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(value_to_scalar)
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::Mapping(map)) => map
            .iter()
            .map(|(key, value)| {
                let key = value_to_scalar(key);
                match value {
                    Value::Sequence(items) => {
                        let values: Vec<String> = items.iter().map(value_to_scalar).collect();
                        format!("{}={}", key, values.join(", "))
                    }
                    other => format!("{}={}", key, value_to_scalar(other)),
                }
            })
            .collect(),
        Some(scalar) => vec![value_to_scalar(scalar)],
    }
}

fn value_to_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml_ng::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Formats the last-detection timestamp as
/// `<Weekday Mon DD YYYY>, <HH:MM:SS AM/PM> (<timezone>)` in local time.
/// Returns `None` when the envelope value is absent or unparseable.
fn format_last_detection(value: &serde_json::Value) -> Option<String> {
    let local = parse_timestamp(value)?;
    Some(format!(
        "{}, {} ({})",
        local.format("%a %b %d %Y"),
        local.format("%I:%M:%S %p"),
        local.format("%Z")
    ))
}

/// The backend sends either epoch millis or a date string.
fn parse_timestamp(value: &serde_json::Value) -> Option<DateTime<Local>> {
    match value {
        serde_json::Value::Number(n) => {
            let millis = n.as_i64()?;
            Local.timestamp_millis_opt(millis).single()
        }
        serde_json::Value::String(s) => {
            if let Ok(fixed) = DateTime::parse_from_rfc3339(s) {
                return Some(fixed.with_timezone(&Local));
            }
            let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()?;
            Local.from_local_datetime(&naive).single()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_YAML: &str = "\
detectionName: cpu_spike
metric: cpu_utilization
dataset: host_metrics
filters:
  country:
    - US
    - IN
dimensionExploration: country
rules:
  - detection:
      - type: THRESHOLD
        params:
          max: 0.9
";

    fn envelope_with_yaml(yaml: &str) -> DetectionEnvelope {
        DetectionEnvelope {
            yaml: Some(yaml.to_string()),
            active: true,
            created_by: Some("smcclung".to_string()),
            updated_by: Some("apucher".to_string()),
            dimensions: vec!["country".to_string()],
            last_timestamp: Some(serde_json::json!(1596455400000i64)),
        }
    }

    #[test]
    fn test_from_envelope_keeps_original_keys_and_derived_fields() {
        let view = DetectionView::from_envelope("1234", &envelope_with_yaml(SAMPLE_YAML))
            .unwrap()
            .unwrap();

        assert!(view.document.contains_key("detectionName"));
        assert!(view.document.contains_key("metric"));
        assert!(view.document.contains_key("dataset"));
        assert!(view.document.contains_key("rules"));

        assert!(view.is_active);
        assert_eq!(view.created_by.as_deref(), Some("smcclung"));
        assert_eq!(view.updated_by.as_deref(), Some("apucher"));
        assert_eq!(view.explore_dimensions, vec!["country"]);
        assert_eq!(view.filters, vec!["country=US, IN"]);
        assert_eq!(view.dimension_exploration, vec!["country"]);
        assert!(view.last_detection_time.is_some());
    }

    #[test]
    fn test_from_envelope_normalized_lists_replace_raw_keys() {
        let view = DetectionView::from_envelope("1234", &envelope_with_yaml(SAMPLE_YAML))
            .unwrap()
            .unwrap();
        assert!(!view.document.contains_key("filters"));
        assert!(!view.document.contains_key("dimensionExploration"));
    }

    #[test]
    fn test_from_envelope_without_yaml_is_none() {
        let envelope = DetectionEnvelope {
            yaml: None,
            ..Default::default()
        };
        let view = DetectionView::from_envelope("1234", &envelope).unwrap();
        assert!(view.is_none());
    }

    #[test]
    fn test_from_envelope_parse_error() {
        let envelope = DetectionEnvelope {
            yaml: Some("detectionName: [unclosed".to_string()),
            ..Default::default()
        };
        let result = DetectionView::from_envelope("1234", &envelope);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("parse detection yaml"));
    }

    #[test]
    fn test_from_envelope_scalar_and_absent_filters_are_list_shaped() {
        let yaml = "detectionName: d\nfilters: browser\n";
        let view = DetectionView::from_envelope("1", &envelope_with_yaml(yaml))
            .unwrap()
            .unwrap();
        assert_eq!(view.filters, vec!["browser"]);
        // dimensionExploration absent in the source yaml
        assert!(view.dimension_exploration.is_empty());
    }

    #[test]
    fn test_normalize_filter_absent_and_null() {
        assert!(normalize_filter(None).is_empty());
        assert!(normalize_filter(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn test_normalize_filter_scalar() {
        assert_eq!(
            normalize_filter(Some(&Value::String("US".to_string()))),
            vec!["US"]
        );
        let number: Value = serde_yaml_ng::from_str("42").unwrap();
        assert_eq!(normalize_filter(Some(&number)), vec!["42"]);
    }

    #[test]
    fn test_normalize_filter_sequence() {
        let value: Value = serde_yaml_ng::from_str("[US, IN, DE]").unwrap();
        assert_eq!(normalize_filter(Some(&value)), vec!["US", "IN", "DE"]);
    }

    #[test]
    fn test_normalize_filter_mapping() {
        let value: Value = serde_yaml_ng::from_str("country: [US, IN]\nbrowser: chrome").unwrap();
        let normalized = normalize_filter(Some(&value));
        assert_eq!(normalized, vec!["country=US, IN", "browser=chrome"]);
    }

    #[test]
    fn test_format_last_detection_epoch_millis() {
        let formatted = format_last_detection(&serde_json::json!(1596455400000i64)).unwrap();
        // "Mon Aug 03 2020, 12:30:00 PM (+00:00)" modulo local timezone
        assert!(formatted.contains("2020"));
        assert!(formatted.contains(", "));
        assert!(formatted.ends_with(')'));
        let weekday = formatted.split(' ').next().unwrap();
        assert_eq!(weekday.len(), 3);
    }

    #[test]
    fn test_format_last_detection_rfc3339_string() {
        let formatted =
            format_last_detection(&serde_json::json!("2020-08-03T12:30:00Z")).unwrap();
        assert!(formatted.contains("2020"));
        assert!(formatted.contains('('));
    }

    #[test]
    fn test_format_last_detection_unparseable() {
        assert!(format_last_detection(&serde_json::json!("not a date")).is_none());
        assert!(format_last_detection(&serde_json::json!(true)).is_none());
    }

    #[test]
    fn test_view_serializes_with_flattened_document() {
        let view = DetectionView::from_envelope("1234", &envelope_with_yaml(SAMPLE_YAML))
            .unwrap()
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["detectionName"], "cpu_spike");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["createdBy"], "smcclung");
        assert_eq!(json["filters"][0], "country=US, IN");
    }
}
