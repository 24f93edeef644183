//! CLI interface definitions for the `dirage` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//!
//! The `Args` struct is used in `main.rs` and other modules to control
//! behavior such as the age clamp horizon and the ignore list.
//!
//! # Example
//!
//! ```bash
//! dirage --max-age 180 --ignore Thumbs.db .DS_Store desktop.ini ~/projects ~/archive
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use clap::Parser;
use std::path::PathBuf;

/// Default age horizon in days; older entries are reported as exactly this.
pub const DEFAULT_MAX_AGE: u64 = 365;

/// Command-line arguments for the `dirage` staleness summarizer.
///
/// This struct defines all available command-line options and flags
/// for controlling the scan and the collapsing of stale branches.
///
/// # Examples
///
/// ```rust
/// use dirage::Args;
/// use clap::Parser;
///
/// let args = Args::parse_from(["dirage", "--max-age", "180", "."]);
///
/// assert_eq!(args.max_age, 180);
/// assert_eq!(args.ignore, vec!["Thumbs.db", ".DS_Store"]);
/// ```
#[derive(Parser, Debug)]
#[command(name = "dirage", author = "Sam Green", version, about)]
pub struct Args {
    /// Root paths to scan (each produces an independent summary tree)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Treat entries older than N days as exactly N days old
    #[arg(long, value_name = "DAYS", default_value_t = DEFAULT_MAX_AGE)]
    pub max_age: u64,

    /// File names excluded from age and count calculations (exact match)
    #[arg(
        long,
        value_name = "NAME",
        num_args = 1..,
        action = clap::ArgAction::Append,
        default_values_t = ["Thumbs.db".to_owned(), ".DS_Store".to_owned()]
    )]
    pub ignore: Vec<String>,
}
