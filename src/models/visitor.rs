//! Visitor model

use chrono::{DateTime, Timelike, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

/// Ephemeral per-request description of incoming traffic
///
/// Unknown fields on the wire are ignored. A missing or malformed field is a
/// validation failure at the boundary, before the decision engine runs.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Visitor {
    /// Visitor state code, e.g. "ca"
    #[serde(rename = "geoState")]
    pub geo_state: String,
    /// Visit instant (ISO-8601)
    pub timestamp: DateTime<Utc>,
}

impl Visitor {
    /// UTC hour of the visit as a decimal string without leading zero
    pub fn utc_hour(&self) -> String {
        self.timestamp.hour().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_hour_no_leading_zero() {
        let visitor: Visitor =
            serde_json::from_str(r#"{"geoState":"ca","timestamp":"2024-01-01T07:30:00Z"}"#)
                .unwrap();
        assert_eq!(visitor.utc_hour(), "7");
    }

    #[test]
    fn test_utc_hour_from_offset_timestamp() {
        let visitor: Visitor =
            serde_json::from_str(r#"{"geoState":"ca","timestamp":"2024-01-01T23:30:00-02:00"}"#)
                .unwrap();
        assert_eq!(visitor.utc_hour(), "1");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let visitor: Visitor = serde_json::from_str(
            r#"{"geoState":"ny","timestamp":"2024-01-01T14:00:00Z","publisher":"abc"}"#,
        )
        .unwrap();
        assert_eq!(visitor.geo_state, "ny");
        assert_eq!(visitor.utc_hour(), "14");
    }

    #[test]
    fn test_malformed_timestamp_rejected() {
        let result: Result<Visitor, _> =
            serde_json::from_str(r#"{"geoState":"ca","timestamp":"yesterday"}"#);
        assert!(result.is_err());
    }
}
