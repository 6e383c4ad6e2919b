// SPDX-License-Identifier: MIT

//! Workflow-side filter configuration
//!
//! Parses inputs like:
//! - `alice`
//! - `bug, urgent`
//! - `` (unset, matches everything)

use super::operator::Operator;

/// Filter for one field, built from workflow inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    field_name: String,
    configured_values: Vec<String>,
    operator: Operator,
}

impl FilterSpec {
    /// Values are trimmed and empty entries dropped, so `[""]` is an unset filter
    pub fn new(
        field_name: impl Into<String>,
        configured_values: Vec<String>,
        operator: Operator,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            configured_values: normalize(configured_values.iter().map(String::as_str)),
            operator,
        }
    }

    /// Build a filter from raw comma-separated values and operator text
    pub fn from_input(field_name: impl Into<String>, values: &str, operator: &str) -> Self {
        Self::new(field_name, parse_values(values), Operator::from_input(operator))
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Configured values in the order they were written
    pub fn configured_values(&self) -> &[String] {
        &self.configured_values
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// An unset filter places no constraint on the subject
    pub fn is_unset(&self) -> bool {
        self.configured_values.is_empty()
    }
}

/// Split a comma-separated input into trimmed, non-empty values
pub fn parse_values(input: &str) -> Vec<String> {
    normalize(input.split(','))
}

fn normalize<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
