//! Workspace-level generation.
//!
//! [`walk_workspace`] lists the directories to process and [`Generator`]
//! runs both phases over them.

mod generator;
mod walk;

pub use generator::{DirectoryRules, Generation, Generator};
pub use walk::{Directory, WorkspaceListing, walk_workspace};
