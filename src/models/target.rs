//! Routing target model

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A routable destination with acceptance rules, a bid value and a daily cap
///
/// Mirrors the Redis hash layout: `value` and `maxAcceptsPerDay` are kept as
/// text and parsed at decision time, `accept` holds the rule object
/// serialized as JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Target {
    pub id: String,
    /// Destination endpoint
    #[serde(default)]
    pub url: String,
    /// Bid value, stored as text
    #[serde(default)]
    pub value: String,
    /// Daily accept cap, stored as text
    #[serde(rename = "maxAcceptsPerDay", default)]
    pub max_accepts_per_day: String,
    /// Acceptance rules, serialized as JSON text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
}

impl Target {
    /// Rebuild a target from its Redis hash fields
    ///
    /// Returns `None` when the hash is absent or carries no id.
    pub fn from_hash(mut fields: HashMap<String, String>) -> Option<Self> {
        let id = fields.remove("id")?;
        Some(Self {
            id,
            url: fields.remove("url").unwrap_or_default(),
            value: fields.remove("value").unwrap_or_default(),
            max_accepts_per_day: fields.remove("maxAcceptsPerDay").unwrap_or_default(),
            accept: fields.remove("accept"),
        })
    }

    /// Bid value as a float; unparseable or missing values rank lowest
    pub fn bid_value(&self) -> f64 {
        self.value.parse().unwrap_or(0.0)
    }

    /// Daily accept cap as an integer
    ///
    /// A missing or non-numeric cap parses to 0, which keeps the target
    /// permanently at capacity.
    pub fn daily_cap(&self) -> u64 {
        self.max_accepts_per_day.parse().unwrap_or(0)
    }

    /// Decode the stored acceptance rules
    ///
    /// A missing or undecodable `accept` field yields `None`; such a target
    /// never matches any visitor.
    pub fn accept_rules(&self) -> Option<AcceptRules> {
        self.accept
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

/// Parsed acceptance rules
///
/// Each clause is a set-membership test. Both clauses must be present and
/// satisfied for a visitor to match; a missing clause is a first-class state
/// that never matches, not a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AcceptRules {
    #[serde(rename = "geoState", skip_serializing_if = "Option::is_none")]
    pub geo_state: Option<RuleClause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<RuleClause>,
}

/// A set-membership rule clause: `{ "$in": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RuleClause {
    #[serde(rename = "$in", default)]
    pub values: Vec<String>,
}

impl RuleClause {
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// Create target request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTarget {
    /// Destination endpoint
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
    /// Bid value, accepted as a string or a bare number
    #[serde(default, deserialize_with = "stringy")]
    #[schema(value_type = Option<String>)]
    pub value: Option<String>,
    /// Daily accept cap, accepted as a string or a bare number
    #[serde(rename = "maxAcceptsPerDay", default, deserialize_with = "stringy")]
    #[schema(value_type = Option<String>)]
    pub max_accepts_per_day: Option<String>,
    /// Acceptance rule object, stored serialized
    #[schema(value_type = Option<Object>)]
    pub accept: Option<serde_json::Value>,
}

/// Partial update request
///
/// Only supplied fields are written; the id is never updatable.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTarget {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "stringy")]
    #[schema(value_type = Option<String>)]
    pub value: Option<String>,
    #[serde(rename = "maxAcceptsPerDay", default, deserialize_with = "stringy")]
    #[schema(value_type = Option<String>)]
    pub max_accepts_per_day: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub accept: Option<serde_json::Value>,
}

/// Accept JSON strings or bare scalars for text-stored fields
fn stringy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }))
}
