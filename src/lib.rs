//! Library layer for the slack-chanops CLI.
//!
//! Split out of the binary so the whole pipeline can be driven against a
//! mock Slack server in integration tests.

pub mod api;
pub mod directory;
pub mod error;
pub mod mutator;
pub mod pipeline;
pub mod resolver;

pub use error::{CallError, Error};
