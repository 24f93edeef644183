//! Text rendering of the reduced tree.
//!
//! One line per surviving node, pre-order, indented two spaces per depth:
//!
//! ```text
//! . (12 files/dirs at least 0 days old)
//!   src (5 files/dirs at least 2 days old)
//! ```
//!
//! The count is `num_files + 1`, the `+1` being the directory itself. Ages
//! are always lower bounds ("at least N days old"): finer-grained values
//! were discarded when branches collapsed, and clamped entries are at least
//! the horizon old.
//!
//! This renderer accepts a pre-built tree and contains no business logic.

use crate::data::{NodeId, Tree};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Renders `tree` to `out`, one line per node.
pub fn render<W: Write>(out: &mut W, tree: &Tree) -> Result<()> {
    if tree.is_empty() {
        return Ok(());
    }
    render_node(out, tree, Tree::ROOT, 0)
}

fn render_node<W: Write>(out: &mut W, tree: &Tree, id: NodeId, depth: usize) -> Result<()> {
    let node = tree.node(id);
    let name = if node.name.as_os_str().is_empty() {
        Path::new(".")
    } else {
        node.name.as_path()
    };
    writeln!(
        out,
        "{:indent$}{} ({} files/dirs at least {} days old)",
        "",
        name.display(),
        node.num_files + 1,
        node.age,
        indent = depth * 2
    )?;
    for &child in &node.children {
        render_node(out, tree, child, depth + 1)?;
    }
    Ok(())
}
