// SPDX-License-Identifier: MIT

//! Action inputs
//!
//! Each input can be given as a flag or through the `INPUT_<NAME>` variable
//! GitHub Actions sets for every `with:` entry of the step.

use crate::error::{ActionError, Result};
use crate::gate::Gate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ActionInputs {
    /// URL of the project to add issues to
    #[arg(long, env = "INPUT_PROJECT-URL")]
    pub project_url: String,

    /// Token with access to the project
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Comma-separated labels to filter on
    #[arg(long, env = "INPUT_LABELED", default_value = "")]
    pub labeled: String,

    /// How the labels combine: `and` or `any`
    #[arg(long, env = "INPUT_LABEL-OPERATOR", default_value = "")]
    pub label_operator: String,

    /// Comma-separated assignees to filter on
    #[arg(long, env = "INPUT_ASSIGNEE", default_value = "")]
    pub assignee: String,

    /// How the assignees combine: `and` or `any`
    #[arg(long, env = "INPUT_ASSIGNEE-OPERATOR", default_value = "")]
    pub assignee_operator: String,

    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,
}

impl ActionInputs {
    /// Build the assignee/label gate from the configured filters
    pub fn gate(&self) -> Gate {
        Gate::from_inputs(
            &self.assignee,
            &self.assignee_operator,
            &self.labeled,
            &self.label_operator,
        )
    }

    pub fn project_url(&self) -> &str {
        self.project_url.trim()
    }

    /// Reject required inputs that were passed but left blank
    pub fn validate(&self) -> Result<()> {
        if self.project_url().is_empty() {
            return Err(ActionError::config("Input required and not supplied: project-url"));
        }
        if self.github_token.trim().is_empty() {
            return Err(ActionError::config("Input required and not supplied: github-token"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Operator;

    #[test]
    fn test_parse_flags() {
        let inputs = ActionInputs::try_parse_from([
            "add-to-project",
            "--project-url",
            " https://github.com/orgs/acme/projects/1 ",
            "--github-token",
            "ghp_secret",
            "--labeled",
            "bug, urgent",
            "--label-operator",
            "AND",
            "--event-path",
            "/tmp/event.json",
        ])
        .unwrap();

        assert_eq!(inputs.project_url(), "https://github.com/orgs/acme/projects/1");
        assert_eq!(inputs.event_path, PathBuf::from("/tmp/event.json"));

        let gate = inputs.gate();
        assert_eq!(gate.labels().configured_values(), &["bug", "urgent"]);
        assert_eq!(gate.labels().operator(), Operator::And);
        assert!(gate.assignee().is_unset());
        assert_eq!(gate.assignee().operator(), Operator::Any);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let inputs = ActionInputs::try_parse_from([
            "add-to-project",
            "--project-url",
            "https://github.com/users/monalisa/projects/2",
            "--github-token",
            "  ",
            "--event-path",
            "/tmp/event.json",
        ])
        .unwrap();

        let err = inputs.validate().unwrap_err();
        assert!(matches!(err, ActionError::Config(ref m) if m.contains("github-token")));
    }
}
