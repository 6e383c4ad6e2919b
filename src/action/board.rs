// SPDX-License-Identifier: MIT

//! Project board access over the GitHub GraphQL API

use super::project_url::OwnerType;
use crate::error::{ActionError, Result};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const ADD_ITEM_MUTATION: &str = r#"
    mutation addIssueToProject($input: AddProjectV2ItemByIdInput!) {
        addProjectV2ItemById(input: $input) {
            item {
                id
            }
        }
    }
"#;

/// Remote project board operations needed to add an item.
#[async_trait]
pub trait ProjectBoard: Send + Sync {
    /// Resolve the GraphQL node id of a project
    async fn project_id(&self, owner_type: OwnerType, owner: &str, number: u64) -> Result<String>;

    /// Add an issue or pull request (by node id) to a project, returning the item id
    async fn add_item(&self, project_id: &str, content_id: &str) -> Result<String>;
}

// --- GraphQL response shapes ---

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Node {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProjectOwnerData {
    #[serde(alias = "organization", alias = "user")]
    owner: Option<ProjectOwner>,
}

#[derive(Debug, Deserialize)]
struct ProjectOwner {
    #[serde(rename = "projectV2")]
    project: Option<Node>,
}

#[derive(Debug, Deserialize)]
struct AddItemData {
    #[serde(rename = "addProjectV2ItemById")]
    added: Option<AddItemPayload>,
}

#[derive(Debug, Deserialize)]
struct AddItemPayload {
    item: Option<Node>,
}

impl<T> GraphQlResponse<T> {
    /// Turn GraphQL-level errors into an [`ActionError::Api`]
    fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(ActionError::api(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| ActionError::api("GraphQL response contained no data"))
    }
}

fn parse_response<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    let response: GraphQlResponse<T> = serde_json::from_value(value)?;
    response.into_data()
}

fn project_id_from(value: serde_json::Value) -> Result<String> {
    let data: ProjectOwnerData = parse_response(value)?;
    data.owner
        .and_then(|o| o.project)
        .map(|p| p.id)
        .ok_or_else(|| ActionError::api("Project not found"))
}

fn item_id_from(value: serde_json::Value) -> Result<String> {
    let data: AddItemData = parse_response(value)?;
    data.added
        .and_then(|a| a.item)
        .map(|i| i.id)
        .ok_or_else(|| ActionError::api("addProjectV2ItemById returned no item"))
}

fn project_query(owner_type: OwnerType) -> String {
    format!(
        r#"
    query getProject($ownerName: String!, $projectNumber: Int!) {{
        {}(login: $ownerName) {{
            projectV2(number: $projectNumber) {{
                id
            }}
        }}
    }}
"#,
        owner_type.graphql_field()
    )
}

// --- GitHub implementation ---

pub struct GithubProjectBoard {
    octocrab: Arc<Octocrab>,
}

impl GithubProjectBoard {
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with a personal or installation token
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        let token: String = token.into();
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl ProjectBoard for GithubProjectBoard {
    async fn project_id(&self, owner_type: OwnerType, owner: &str, number: u64) -> Result<String> {
        let response: serde_json::Value = self
            .octocrab
            .graphql(&json!({
                "query": project_query(owner_type),
                "variables": {
                    "ownerName": owner,
                    "projectNumber": number
                }
            }))
            .await?;

        project_id_from(response)
    }

    async fn add_item(&self, project_id: &str, content_id: &str) -> Result<String> {
        let response: serde_json::Value = self
            .octocrab
            .graphql(&json!({
                "query": ADD_ITEM_MUTATION,
                "variables": {
                    "input": {
                        "contentId": content_id,
                        "projectId": project_id
                    }
                }
            }))
            .await?;

        item_id_from(response)
    }
}
