// SPDX-License-Identifier: MIT

//! Combinators for filter values

/// How the configured values of a filter combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Operator {
    /// Every configured value must be present
    And,
    /// At least one configured value must be present
    #[default]
    Any,
}

impl Operator {
    /// Normalize workflow input into an operator.
    ///
    /// Only `and` (case-insensitive, surrounding whitespace ignored) selects
    /// [`Operator::And`]; empty and unrecognized text fall back to [`Operator::Any`].
    pub fn from_input(input: &str) -> Self {
        if input.trim().to_lowercase() == "and" {
            Operator::And
        } else {
            Operator::Any
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::And => write!(f, "and"),
            Operator::Any => write!(f, "any"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_display() {
        assert_eq!(format!("{}", Operator::And), "and");
        assert_eq!(format!("{}", Operator::Any), "any");
    }

    #[test]
    fn test_and_is_case_and_whitespace_insensitive() {
        assert_eq!(Operator::from_input("and"), Operator::And);
        assert_eq!(Operator::from_input("AND "), Operator::And);
        assert_eq!(Operator::from_input("  And\n"), Operator::And);
    }

    #[test]
    fn test_unrecognized_falls_back_to_any() {
        assert_eq!(Operator::from_input(""), Operator::Any);
        assert_eq!(Operator::from_input("   "), Operator::Any);
        assert_eq!(Operator::from_input("xor"), Operator::Any);
        assert_eq!(Operator::from_input("or"), Operator::Any);
        assert_eq!(Operator::from_input("any"), Operator::Any);
        assert_eq!(Operator::from_input("a n d"), Operator::Any);
    }

    #[test]
    fn test_default_is_any() {
        assert_eq!(Operator::default(), Operator::Any);
    }
}
