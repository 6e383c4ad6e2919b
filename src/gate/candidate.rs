// SPDX-License-Identifier: MIT

//! Issue/PR-side facts for one field

/// Values actually present on an issue or pull request for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    field_name: String,
    actual_values: Vec<String>,
    subject_id: Option<u64>,
}

impl Candidate {
    /// Values are kept as delivered by GitHub, without trimming or deduplication
    pub fn new(
        field_name: impl Into<String>,
        actual_values: Vec<String>,
        subject_id: Option<u64>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            actual_values,
            subject_id,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn actual_values(&self) -> &[String] {
        &self.actual_values
    }

    /// Issue or pull request number, used only in diagnostics
    pub fn subject_id(&self) -> Option<u64> {
        self.subject_id
    }

    pub fn contains(&self, value: &str) -> bool {
        self.actual_values.iter().any(|v| v == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_exact() {
        let candidate = Candidate::new("labels", vec!["bug".to_string()], Some(7));
        assert!(candidate.contains("bug"));
        assert!(!candidate.contains("Bug"));
        assert!(!candidate.contains(" bug"));
        assert_eq!(candidate.subject_id(), Some(7));
    }
}
