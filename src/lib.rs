//! Library crate for dirage
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Age Calculation**: Days-since-modification for files and directories,
//!   clamped to a configurable horizon
//! - **Tree Construction**: Builds a directory tree from an ordered walk,
//!   ageing each directory by its own mtime and its immediate files
//! - **Tree Collapsing**: Folds uniformly-stale, childless branches into
//!   their parents while preserving file/directory counts
//! - **Rendering**: Indented, line-oriented summary of the reduced tree
//!
//! # Modules
//!
//! - [`age`]: Age computation (`entry_age`, `age_from_mtime`)
//! - [`cli`]: Command-line interface definitions
//! - [`data`]: Core tree structures (`Tree`, `Node`, `NodeId`)
//! - [`walk`]: Directory walking as per-directory `WalkStep` events
//! - [`build`]: Tree construction from walk events
//! - [`collapse`]: Reduction of stale branches
//! - [`output`]: Text rendering of the reduced tree

pub mod age;
pub mod build;
pub mod cli;
pub mod collapse;
pub mod data;
pub mod output;
pub mod walk;

pub use cli::Args;
pub use data::{Node, NodeId, Tree};
