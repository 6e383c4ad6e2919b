// SPDX-License-Identifier: MIT

//! Project URL parsing
//!
//! Accepted shapes:
//! - `https://github.com/orgs/<owner>/projects/<number>`
//! - `https://github.com/users/<owner>/projects/<number>`
//! - either of the above without the `https://` prefix, optionally followed
//!   by further path segments such as `/views/1`

use crate::error::{ActionError, Result};
use url::Url;

const GITHUB_HOST: &str = "github.com";

/// Kind of account that owns a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerType {
    Organization,
    User,
}

impl OwnerType {
    /// Map the URL path segment (`orgs` or `users`) to an owner type
    pub fn from_path_segment(segment: &str) -> Result<Self> {
        match segment {
            "orgs" => Ok(OwnerType::Organization),
            "users" => Ok(OwnerType::User),
            other => Err(ActionError::UnsupportedOwnerType(other.to_string())),
        }
    }

    /// Root field used to look the owner up in the GraphQL API
    pub fn graphql_field(&self) -> &'static str {
        match self {
            OwnerType::Organization => "organization",
            OwnerType::User => "user",
        }
    }
}

impl std::fmt::Display for OwnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.graphql_field())
    }
}

/// A parsed project board location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUrl {
    pub owner_type: OwnerType,
    pub owner: String,
    pub number: u64,
}

impl ProjectUrl {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || ActionError::InvalidProjectUrl(input.to_string());

        let normalized = if input.starts_with("https://") {
            input.to_string()
        } else if input.contains("://") {
            return Err(invalid());
        } else {
            format!("https://{}", input)
        };

        let url = Url::parse(&normalized).map_err(|_| invalid())?;
        if url.host_str() != Some(GITHUB_HOST)
            || url.port().is_some()
            || !url.username().is_empty()
        {
            return Err(invalid());
        }

        let segments: Vec<&str> = url.path_segments().ok_or_else(invalid)?.collect();
        let (owner_segment, owner, projects, number_segment) = match segments.as_slice() {
            [a, b, c, d, ..] => (*a, *b, *c, *d),
            _ => return Err(invalid()),
        };

        if owner.is_empty() || projects != "projects" {
            return Err(invalid());
        }
        let owner_type = OwnerType::from_path_segment(owner_segment).map_err(|_| invalid())?;

        let digits: String = number_segment
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let number = digits.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self {
            owner_type,
            owner: owner.to_string(),
            number,
        })
    }
}
