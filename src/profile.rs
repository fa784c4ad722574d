//! Idempotent mutation of the user's shell profile
//!
//! Several steps append configuration to the same user-owned file (aliases,
//! PATH entries, the NVM bootstrap block). The contract here keeps that file
//! sane across steps and across repeated runs: a given logical line is added
//! at most once, existing content is never rewritten or reordered, and all
//! writes go through append mode so no failure path can truncate the file.

use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Append `line` to `path` unless the file already contains it verbatim.
///
/// A missing file is treated as empty and created on first insert. Returns
/// `true` when the line was inserted, `false` when it was already present.
pub fn ensure_line(path: &Path, line: &str) -> Result<bool> {
    let existing = read_or_empty(path)?;
    if existing.lines().any(|l| l == line) {
        debug!("line already present in {}: {}", path.display(), line);
        return Ok(false);
    }

    append_lines(path, &existing, &[line])?;
    debug!("appended line to {}: {}", path.display(), line);
    Ok(true)
}

/// Append a related group of lines guarded by a marker substring.
///
/// When `marker` occurs anywhere in the file the whole block is skipped,
/// even if only part of it was written by an earlier run or another tool.
/// Otherwise each line is checked independently and the missing ones are
/// appended in order. Returns `true` when anything was written.
pub fn ensure_block(path: &Path, marker: &str, lines: &[&str]) -> Result<bool> {
    let existing = read_or_empty(path)?;
    if existing.contains(marker) {
        debug!(
            "block marker {:?} already present in {}",
            marker,
            path.display()
        );
        return Ok(false);
    }

    let missing: Vec<&str> = lines
        .iter()
        .filter(|line| !existing.lines().any(|l| l == **line))
        .copied()
        .collect();
    if missing.is_empty() {
        return Ok(false);
    }

    append_lines(path, &existing, &missing)?;
    debug!(
        "appended {} line(s) for block {:?} to {}",
        missing.len(),
        marker,
        path.display()
    );
    Ok(true)
}

fn read_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Append lines to the file, repairing a missing trailing newline first.
/// Opened in append mode: a failed write can lose the appended tail but
/// never the existing content.
fn append_lines(path: &Path, existing: &str, lines: &[&str]) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        writeln!(file)?;
    }
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}
