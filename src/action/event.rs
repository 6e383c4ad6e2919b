// SPDX-License-Identifier: MIT

//! Triggering event payload - JSON file loading and parsing
//!
//! GitHub Actions writes the webhook payload of the triggering event to the
//! file named by `GITHUB_EVENT_PATH`.

use crate::error::Result;
use crate::gate::Subject;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub issue: Option<IssueOrPullRequest>,
    #[serde(default)]
    pub pull_request: Option<IssueOrPullRequest>,
}

/// Fields shared by the `issue` and `pull_request` event objects
#[derive(Debug, Clone, Deserialize)]
pub struct IssueOrPullRequest {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub assignees: Option<Vec<Account>>,
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

impl EventPayload {
    /// Load an event payload from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parse an event payload from a JSON string
    pub fn parse_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The issue, or failing that the pull request, the event is about
    pub fn subject(&self) -> Option<Subject> {
        self.issue
            .as_ref()
            .or(self.pull_request.as_ref())
            .map(IssueOrPullRequest::to_subject)
    }
}

impl IssueOrPullRequest {
    pub fn to_subject(&self) -> Subject {
        Subject {
            number: self.number,
            node_id: self.node_id.clone(),
            assignees: self
                .assignees
                .iter()
                .flatten()
                .map(|a| a.login.clone())
                .collect(),
            labels: self
                .labels
                .iter()
                .flatten()
                .map(|l| l.name.clone())
                .collect(),
        }
    }
}
