//! Acceptance matcher
//!
//! Pure predicate deciding whether a target's rules accept a visitor.

use crate::models::{target::Target, visitor::Visitor};

/// Whether `target` accepts `visitor`
///
/// Both rule clauses must be present and satisfied: the visitor's state code
/// and UTC hour each have to appear in the corresponding `$in` set. A target
/// without decodable rules rejects everything.
pub fn matches(target: &Target, visitor: &Visitor) -> bool {
    let rules = match target.accept_rules() {
        Some(rules) => rules,
        None => return false,
    };

    match (rules.geo_state, rules.hour) {
        (Some(geo), Some(hour)) => {
            geo.contains(&visitor.geo_state) && hour.contains(&visitor.utc_hour())
        }
        _ => false,
    }
}
