// SPDX-License-Identifier: MIT

//! Gate a subject and, when admitted, add it to the project

use super::board::ProjectBoard;
use super::project_url::ProjectUrl;
use crate::error::{ActionError, Result};
use crate::gate::{Gate, Subject};

/// Result of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The filters did not match; nothing was sent to GitHub
    Skipped,
    /// The subject was added as a project item
    Added { item_id: String },
}

/// Run the action for one subject.
///
/// The project URL is only validated once the gate has admitted the subject.
pub async fn run(
    gate: &Gate,
    project_url: &str,
    subject: &Subject,
    board: &dyn ProjectBoard,
) -> Result<Outcome> {
    for filter in [gate.assignee(), gate.labels()] {
        log::debug!(
            "Filter \"{}\": [{}] ({})",
            filter.field_name(),
            filter.configured_values().join(", "),
            filter.operator()
        );
    }

    if !gate.admits(subject) {
        return Ok(Outcome::Skipped);
    }

    log::debug!("Project URL: {}", project_url);
    let url = ProjectUrl::parse(project_url)?;

    log::debug!("Owner name: {}", url.owner);
    log::debug!("Project number: {}", url.number);
    log::debug!("Owner type: {}", url.owner_type);

    let content_id = subject
        .node_id
        .as_deref()
        .ok_or(ActionError::MissingContent)?;

    let project_id = board
        .project_id(url.owner_type, &url.owner, url.number)
        .await?;

    log::debug!("Project node ID: {}", project_id);
    log::debug!("Content ID: {}", content_id);

    let item_id = board.add_item(&project_id, content_id).await?;
    log::info!("Added {} to project as item {}", content_id, item_id);

    Ok(Outcome::Added { item_id })
}
