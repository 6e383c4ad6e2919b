// SPDX-License-Identifier: MIT

pub mod board;
pub mod event;
pub mod inputs;
pub mod outputs;
pub mod project_url;
pub mod runner;
