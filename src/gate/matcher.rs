// SPDX-License-Identifier: MIT

//! Filter evaluation against issue/PR facts

use super::candidate::Candidate;
use super::filter::FilterSpec;
use super::operator::Operator;

/// Evaluate a filter against the values present on a subject
///
/// An unset filter always matches. A non-match is logged at info level and
/// is a normal outcome, not an error.
pub fn evaluate(spec: &FilterSpec, candidate: &Candidate) -> bool {
    if spec.is_unset() {
        return true;
    }

    let values = spec.configured_values();
    let matched = match spec.operator() {
        Operator::And => values.iter().all(|v| candidate.contains(v)),
        Operator::Any => values.iter().any(|v| candidate.contains(v)),
    };

    if !matched {
        log::info!("{}", skip_message(spec, candidate));
    }

    matched
}

/// Diagnostic explaining why a subject was rejected by a filter
pub fn skip_message(spec: &FilterSpec, candidate: &Candidate) -> String {
    let quantifier = match spec.operator() {
        Operator::And => "all the fields",
        Operator::Any => "one of the fields",
    };
    let subject = candidate
        .subject_id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "Skipping issue {} because it doesn't match {} from \"{}\": {} (found: {})",
        subject,
        quantifier,
        spec.field_name(),
        spec.configured_values().join(", "),
        candidate.actual_values().join(", ")
    )
}
