//! Line-based selection surface
//!
//! The fallback for terminals that cannot host the full-screen menu (and
//! for piped stdin). Prints the catalog once, then reads one line per
//! attempt: `all` or an empty line selects everything, `none` selects
//! nothing (an explicit empty run, not a cancellation), `q` cancels, and
//! anything else is parsed as comma-separated 1-based step numbers.
//! Out-of-range input re-prompts with the complete invalid set instead of
//! aborting.

use super::{parse_index_list, Resolution, Selection};
use crate::error::Result;
use crate::registry::Registry;
use std::io::{BufRead, Write};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    All,
    None,
    Cancel,
    Chosen(Selection),
    Invalid(Vec<String>),
}

/// Interpret a single line of operator input against a catalog of
/// `catalog_len` entries.
pub fn parse_line(input: &str, catalog_len: usize) -> LineCommand {
    match input.trim() {
        "" | "all" => LineCommand::All,
        "none" => LineCommand::None,
        "q" => LineCommand::Cancel,
        csv => match parse_index_list(csv, catalog_len) {
            Ok(selection) => LineCommand::Chosen(selection),
            Err(invalid) => LineCommand::Invalid(invalid.0),
        },
    }
}

/// Run the line-based surface against stdin/stdout.
pub fn resolve(registry: &Registry) -> Result<Resolution> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    resolve_from(registry, &mut stdin.lock(), &mut stdout)
}

fn resolve_from(
    registry: &Registry,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Resolution> {
    writeln!(output, "Available setup steps:")?;
    for (index, name, description) in registry.list() {
        writeln!(output, "{:>3}. {:<24} {}", index + 1, name, description)?;
    }
    writeln!(output)?;

    loop {
        write!(
            output,
            "Select steps (e.g. 1,3,5), 'all', 'none', or 'q' to quit [all]: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF is a cancellation, the operator cannot answer.
            return Ok(Resolution::Cancelled);
        }

        match parse_line(&line, registry.len()) {
            LineCommand::All => return Ok(Resolution::Chosen(Selection::all(registry.len()))),
            LineCommand::None => return Ok(Resolution::Chosen(Selection::empty())),
            LineCommand::Cancel => return Ok(Resolution::Cancelled),
            LineCommand::Chosen(selection) => return Ok(Resolution::Chosen(selection)),
            LineCommand::Invalid(tokens) => {
                writeln!(
                    output,
                    "Invalid step number(s): {}. Enter values between 1 and {}.",
                    tokens.join(", "),
                    registry.len()
                )?;
            }
        }
    }
}
