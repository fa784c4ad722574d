//! Flag-driven selection surface
//!
//! Resolves `--all` and `--select <csv>` without any interaction. Because
//! re-prompting is impossible here, an out-of-range index is a fatal input
//! error rather than a recoverable one.

use super::{parse_index_list, Resolution, Selection};
use crate::error::{Result, SetupError};

/// Resolve the non-interactive flags, if any were given.
///
/// Returns `Ok(None)` when neither flag is present and an interactive
/// surface should take over.
pub fn resolve(all: bool, select: Option<&str>, catalog_len: usize) -> Result<Option<Resolution>> {
    if all {
        return Ok(Some(Resolution::Chosen(Selection::all(catalog_len))));
    }

    let Some(csv) = select else {
        return Ok(None);
    };

    match parse_index_list(csv, catalog_len) {
        Ok(selection) => Ok(Some(Resolution::Chosen(selection))),
        Err(invalid) => Err(SetupError::input(format!(
            "step number(s) {} out of range; valid steps are 1-{}",
            invalid, catalog_len
        ))),
    }
}
