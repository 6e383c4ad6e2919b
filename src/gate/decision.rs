// SPDX-License-Identifier: MIT

//! Overall admission decision for an issue or pull request

use super::candidate::Candidate;
use super::filter::FilterSpec;
use super::matcher::evaluate;

/// Issue or pull request facts taken from the triggering event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subject {
    pub number: Option<u64>,
    /// GraphQL node id, used as the content id when adding to a project
    pub node_id: Option<String>,
    pub assignees: Vec<String>,
    pub labels: Vec<String>,
}

impl Subject {
    pub fn assignee_candidate(&self) -> Candidate {
        Candidate::new("assignee", self.assignees.clone(), self.number)
    }

    pub fn label_candidate(&self) -> Candidate {
        Candidate::new("labels", self.labels.clone(), self.number)
    }
}

/// Assignee and label filters configured for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    assignee: FilterSpec,
    labels: FilterSpec,
}

impl Gate {
    pub fn new(assignee: FilterSpec, labels: FilterSpec) -> Self {
        Self { assignee, labels }
    }

    /// Build both filters from raw workflow inputs
    pub fn from_inputs(
        assignee: &str,
        assignee_operator: &str,
        labeled: &str,
        label_operator: &str,
    ) -> Self {
        Self::new(
            FilterSpec::from_input("assignee", assignee, assignee_operator),
            FilterSpec::from_input("labeled", labeled, label_operator),
        )
    }

    pub fn assignee(&self) -> &FilterSpec {
        &self.assignee
    }

    pub fn labels(&self) -> &FilterSpec {
        &self.labels
    }

    /// True when both the assignee and the label filter match
    pub fn admits(&self, subject: &Subject) -> bool {
        evaluate(&self.assignee, &subject.assignee_candidate())
            && evaluate(&self.labels, &subject.label_candidate())
    }
}
