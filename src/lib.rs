// SPDX-License-Identifier: MIT

//! Add issues and pull requests to GitHub projects, gated by assignee and
//! label filters.
//!
//! - [`gate`] holds the pure matching rules.
//! - [`action`] wires them to workflow inputs, the event payload and GitHub.

pub mod action;
pub mod error;
pub mod gate;

pub use error::{ActionError, Result};
