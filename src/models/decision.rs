//! Routing decision model

use serde::Serialize;
use utoipa::ToSchema;

/// Outcome of one routing decision call
///
/// Serializes as `{"decision":"accept","url":...}` or `{"decision":"reject"}`.
/// A reject is a normal successful outcome, distinct from any error.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum Decision {
    Accept { url: String },
    Reject,
}
