//! Main entry point for the `dirage` CLI application.
//!
//! `dirage` scans one or more directory trees and prints a compact summary
//! of which areas were modified recently versus which are stale. Each
//! directory is aged by the newest modification among itself and its
//! immediate files; branches that are childless and no newer than their
//! parent are collapsed away, so only areas with more recent activity
//! remain visible as distinct lines.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Captures the reference time once, so all ages in a run are comparable
//! - Delegates traversal to [`dirage::walk::walk_steps`], tree assembly to
//!   [`dirage::build::build_tree`], reduction to [`dirage::collapse::collapse`]
//!   and rendering to [`dirage::output::render`]
//! - Reports per-root failures and keeps scanning the remaining roots
//!
//! # Flags of Interest
//! - `--max-age N`: report anything older than N days as exactly N days old
//! - `--ignore NAME`: file names excluded from ages and counts
//!
//! # Modules
//! - [`dirage::walk`] - directory traversal as per-directory events
//! - [`dirage::build`] - tree construction and age aggregation
//! - [`dirage::collapse`] - reduction of stale branches
//! - [`dirage::output`] - text rendering

use anyhow::{Result, bail};
use clap::Parser;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use dirage::Args;
use dirage::build::build_tree;
use dirage::collapse::collapse;
use dirage::output;
use dirage::walk::walk_steps;

/// Scans a single root path and writes its reduced summary tree to `out`.
fn scan_root<W: Write>(
    out: &mut W,
    root: &Path,
    reference: SystemTime,
    max_age: u64,
    ignore: &HashSet<String>,
) -> Result<()> {
    let steps = walk_steps(root)?;
    let tree = build_tree(root, &steps, reference, max_age, ignore)?;
    let reduced = collapse(&tree);

    writeln!(out, "After collapsing less recently updated sub-dirs:")?;
    output::render(out, &reduced)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // One reference time for the whole run keeps ages mutually comparable
    let reference = SystemTime::now();
    let ignore: HashSet<String> = args.ignore.iter().cloned().collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for root in &args.paths {
        writeln!(out, "Scanning {}", root.display())?;
        if let Err(err) = scan_root(&mut out, root, reference, args.max_age, &ignore) {
            eprintln!("dirage: skipping {}: {:#}", root.display(), err);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} root path(s) could not be scanned", failures, args.paths.len());
    }
    Ok(())
}
