//! Selection resolution
//!
//! Three interchangeable front-ends let the operator choose which steps to
//! run: a full-screen checkbox menu ([`tui`]), a line-based menu ([`prompt`])
//! for terminals that cannot host the TUI, and non-interactive flags
//! ([`flags`]). All of them reduce to the same [`Selection`] before the
//! executor sees anything, so downstream code never knows which surface
//! produced it.

pub mod flags;
pub mod prompt;
pub mod tui;

use std::fmt;

/// An ordered, de-duplicated set of catalog indices.
///
/// Order is always the catalog's registration order, never the order the
/// operator happened to type or toggle; later steps may depend on side
/// effects of earlier ones, so selection must never reorder execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(Vec<usize>);

impl Selection {
    /// Normalize arbitrary 0-based indices: duplicates removed, catalog
    /// order restored.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }

    /// Every step in a catalog of `len` entries.
    pub fn all(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// No steps at all. Distinct from a cancelled selection: the operator
    /// asked for an (empty) run.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a selection surface resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Chosen(Selection),
    Cancelled,
}

/// Tokens from an index list that did not resolve to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIndices(pub Vec<String>);

impl fmt::Display for InvalidIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Parse a comma-separated list of 1-based step numbers against a catalog
/// of `catalog_len` entries.
///
/// Shared by the line-based and flag-driven surfaces so both resolve
/// identical input to identical selections. Every invalid token is
/// collected and reported together rather than one at a time.
pub fn parse_index_list(
    input: &str,
    catalog_len: usize,
) -> std::result::Result<Selection, InvalidIndices> {
    let mut indices = Vec::new();
    let mut invalid = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(n) if n >= 1 && n <= catalog_len => indices.push(n - 1),
            _ => invalid.push(token.to_string()),
        }
    }

    if invalid.is_empty() {
        Ok(Selection::from_indices(indices))
    } else {
        Err(InvalidIndices(invalid))
    }
}
