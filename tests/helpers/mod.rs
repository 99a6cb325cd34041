//! Shared helpers for integration tests.

pub mod fixtures;
pub mod workspace;

pub use workspace::{Workspace, deps, srcs};
