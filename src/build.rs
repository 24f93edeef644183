//! Tree construction for `dirage`.
//!
//! This module turns an ordered sequence of [`WalkStep`] events into a
//! [`Tree`] whose parent/child edges mirror path containment. Each
//! directory's age is the minimum of its own modification age and the ages
//! of its immediate non-ignored files, so a directory is exactly as "fresh"
//! as the newest thing directly inside it. File names on the ignore list
//! affect neither age nor count.
//!
//! The main entry point is [`build_tree`]. Node ages are fixed here, before
//! collapsing starts, and are never recomputed afterwards.

use crate::age::entry_age;
use crate::data::{Node, NodeId, Tree};
use crate::walk::WalkStep;
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::path::Path;
use std::time::SystemTime;

/// Builds the directory tree for `root` from top-down walk steps.
///
/// # Arguments
/// * `root` - The scanned root path; node names are stored relative to it,
///   with the root node itself named by the empty path
/// * `steps` - Walk steps in top-down order, the root directory first
/// * `reference` - Reference time for all age computations in this run
/// * `max_age` - Age clamp horizon in days
/// * `ignore` - File names (exact, case-sensitive) excluded from age and
///   count
///
/// # Errors
/// Returns an error if `steps` is empty, if a step's path does not lie under
/// `root`, or if a step has no ancestor in the tree (broken walk order).
pub fn build_tree(
    root: &Path,
    steps: &[WalkStep],
    reference: SystemTime,
    max_age: u64,
    ignore: &HashSet<String>,
) -> Result<Tree> {
    let mut tree = Tree::new();
    let mut last: NodeId = Tree::ROOT;

    for step in steps {
        let mut age = entry_age(&step.path, reference, max_age);
        let mut num_files: u64 = 0;

        for file in &step.files {
            let ignored = file
                .file_name()
                .is_some_and(|n| ignore.contains(n.to_string_lossy().as_ref()));
            if ignored {
                continue;
            }
            num_files += 1;
            age = age.min(entry_age(file, reference, max_age));
        }

        // The first step is root itself, so rel comes out as the empty path
        let rel = step
            .path
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", step.path.display(), root.display()))?
            .to_path_buf();
        let node = Node::new(rel, age, num_files);

        last = if tree.is_empty() {
            tree.push_root(node)
        } else {
            tree.insert_from(last, node)?
        };
    }

    if tree.is_empty() {
        bail!("walk of {} produced no directories", root.display());
    }

    Ok(tree)
}
