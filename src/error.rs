// SPDX-License-Identifier: MIT

//! Typed error handling for add-to-project
//!
//! Gating never fails; every error here comes from the surrounding I/O:
//! reading inputs, parsing the project URL and talking to GitHub.

use thiserror::Error;

/// Top-level error type for add-to-project
#[derive(Debug, Error)]
pub enum ActionError {
    /// Project URL does not point at an organization or user project
    #[error(
        "Invalid project URL: {0}. Project URL should match the format https://github.com/<orgs-or-users>/<ownerName>/projects/<projectNumber>"
    )]
    InvalidProjectUrl(String),

    /// Owner segment of the project URL is neither `orgs` nor `users`
    #[error("Unsupported ownerType: {0}. Must be one of 'orgs' or 'users'")]
    UnsupportedOwnerType(String),

    /// The event carried no issue or pull request node id to add
    #[error("Event payload has no issue or pull request node id")]
    MissingContent,

    /// Configuration errors (missing inputs, unreadable event file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// GraphQL responses with errors or without the expected data
    #[error("GitHub API error: {message}")]
    Api { message: String },

    /// Transport-level errors from octocrab
    #[error(transparent)]
    GitHub(#[from] octocrab::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ActionError {
    /// Create an API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        let err = ActionError::InvalidProjectUrl("https://example.com".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid project URL: https://example.com. Project URL should match the format https://github.com/<orgs-or-users>/<ownerName>/projects/<projectNumber>"
        );
    }

    #[test]
    fn test_unsupported_owner_type_message() {
        let err = ActionError::UnsupportedOwnerType("teams".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported ownerType: teams. Must be one of 'orgs' or 'users'"
        );
    }

    #[test]
    fn test_helpers() {
        assert!(matches!(
            ActionError::api("boom"),
            ActionError::Api { message } if message == "boom"
        ));
        assert_eq!(
            ActionError::config("missing token").to_string(),
            "Configuration error: missing token"
        );
    }
}
