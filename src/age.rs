//! Age computation for files and directories.
//!
//! An entry's age is the number of whole days between its modification time
//! and a reference time captured once at process start, clamped to a
//! configured maximum so that multi-decade-old entries compare as equally
//! stale. Entries whose metadata cannot be read (vanished between
//! enumeration and stat, permission denied) are treated as maximally stale
//! rather than failing the scan.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Seconds per day used for the mtime-to-days conversion.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Converts a modification time into an age in whole days.
///
/// # Arguments
/// * `mtime` - The entry's last modification time
/// * `reference` - Reference "now", captured once per run
/// * `max_age` - Clamp horizon in days
///
/// # Returns
/// * `u64` - `clamp(floor((reference - mtime) / 86400), 0, max_age)`; a
///   modification time in the future yields 0
pub fn age_from_mtime(mtime: SystemTime, reference: SystemTime, max_age: u64) -> u64 {
    let secs = reference
        .duration_since(mtime)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    (secs / SECONDS_PER_DAY).min(max_age)
}

/// Returns the clamped age in days of the file or directory at `path`.
///
/// A stat failure is absorbed locally: the entry is reported as `max_age`
/// days old, never as an error that aborts the scan.
pub fn entry_age(path: &Path, reference: SystemTime, max_age: u64) -> u64 {
    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(mtime) => age_from_mtime(mtime, reference, max_age),
        Err(_) => max_age,
    }
}
