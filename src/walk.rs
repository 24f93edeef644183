//! Directory walking for `dirage`.
//!
//! This module handles:
//! - Top-down directory traversal using `WalkDir`
//! - Regrouping the entry stream into one [`WalkStep`] per directory, each
//!   step carrying the directory's immediate files
//! - Progress spinner via `indicatif`
//!
//! The main entry point is [`walk_steps`], which yields steps in walk order
//! (every directory before any of its descendants). Entries that vanish or
//! turn unreadable mid-walk are skipped; an unreadable root is an error so
//! the caller can report it and move on to the next root path.

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

/// One directory visited during the walk, with its immediate files.
#[derive(Debug, Clone)]
pub struct WalkStep {
    pub path: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Walks `root` top-down and returns one step per directory, in walk order.
///
/// Symlinks are not followed. Subdirectory order within a step's parent is
/// whatever the underlying walk yields; it is preserved, not sorted.
///
/// # Errors
/// Returns an error if `root` itself cannot be read (not found, permission
/// denied) or is not a directory. Errors on deeper entries are skipped.
pub fn walk_steps(root: &Path) -> Result<Vec<WalkStep>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Walking directories... [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut steps: Vec<WalkStep> = Vec::new();
    let mut step_index: HashMap<PathBuf, usize> = HashMap::new();

    for entry in WalkDir::new(root).follow_links(false) {
        pb.tick();
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                if steps.is_empty() {
                    // The root itself is unreadable
                    return Err(err).with_context(|| format!("cannot read {}", root.display()));
                }
                continue;
            }
        };

        if entry.file_type().is_dir() {
            step_index.insert(entry.path().to_path_buf(), steps.len());
            steps.push(WalkStep {
                path: entry.into_path(),
                files: Vec::new(),
            });
        } else if entry.file_type().is_file() {
            // Top-down order guarantees the parent directory's step exists
            if let Some(&i) = entry.path().parent().and_then(|p| step_index.get(p)) {
                steps[i].files.push(entry.into_path());
            }
        }
    }

    pb.finish_and_clear();

    if steps.is_empty() {
        bail!("{} is not a directory", root.display());
    }

    Ok(steps)
}
