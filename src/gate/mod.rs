// SPDX-License-Identifier: MIT

//! Assignee/label gating for issues and pull requests
//!
//! A workflow configures one filter per field:
//! - `assignee: alice, bob` with `assignee-operator: and`
//! - `labeled: bug, urgent` with `label-operator: any` (the default)
//!
//! The subject is admitted only when every configured filter matches.

mod candidate;
mod decision;
mod filter;
mod matcher;
mod operator;

pub use candidate::Candidate;
pub use decision::{Gate, Subject};
pub use filter::{parse_values, FilterSpec};
pub use matcher::{evaluate, skip_message};
pub use operator::Operator;
