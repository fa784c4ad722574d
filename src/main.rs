//! macsetup - Main entry point
//!
//! Resolves a selection through one of three surfaces (full-screen checkbox
//! menu, line-based prompt, non-interactive flags), then hands it to the run
//! executor and reports the outcome. Exit code is 0 when nothing failed,
//! 1 otherwise.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use macsetup::cli::Cli;
use macsetup::error::{Result, SetupError};
use macsetup::select::{self, Resolution, Selection};
use macsetup::system::SetupContext;
use macsetup::{Registry, executor, preflight, report};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{IsTerminal, Write, stdin, stdout};
use tracing::{debug, info};

/// Initialize the tracing subscriber. Quiet by default; RUST_LOG overrides.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    info!("macsetup starting up");

    let cli = Cli::parse_args();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let registry = Registry::standard();

    if cli.list {
        print_catalog(&registry);
        return Ok(0);
    }

    // Gate the whole run on platform compatibility before any step executes.
    preflight::check()?;
    let ctx = SetupContext::detect()?;

    let selection = match resolve_selection(&cli, &registry)? {
        Resolution::Chosen(selection) => selection,
        Resolution::Cancelled => {
            println!("Setup cancelled.");
            return Ok(0);
        }
    };

    if selection.is_empty() {
        println!("Nothing selected; nothing to do.");
        return Ok(0);
    }

    if !cli.no_confirm && !confirm_run(&registry, &selection)? {
        println!("Setup cancelled.");
        return Ok(0);
    }

    let run_report = executor::execute(&registry, &selection, &ctx);
    print!("{}", report::render(&run_report));

    Ok(if run_report.is_clean() { 0 } else { 1 })
}

/// Resolve the selection through whichever surface applies: flags when
/// given, the full-screen menu on a terminal, the line-based prompt
/// otherwise.
fn resolve_selection(cli: &Cli, registry: &Registry) -> Result<Resolution> {
    if let Some(resolution) = select::flags::resolve(cli.all, cli.select.as_deref(), registry.len())?
    {
        debug!("selection resolved from flags");
        return Ok(resolution);
    }

    if stdout().is_terminal() && stdin().is_terminal() {
        run_tui_selection(registry)
    } else {
        debug!("no attached terminal, using line-based selection");
        select::prompt::resolve(registry)
    }
}

/// Run the checkbox menu inside a raw-mode alternate screen, restoring the
/// terminal whatever happens.
fn run_tui_selection(registry: &Registry) -> Result<Resolution> {
    enable_raw_mode().map_err(|e| SetupError::terminal(format!("failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| SetupError::terminal(format!("failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .map_err(|e| SetupError::terminal(format!("failed to create terminal: {}", e)))
        .and_then(|mut terminal| select::tui::run(&mut terminal, registry));

    // Always attempt cleanup, even if the menu failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

fn print_catalog(registry: &Registry) {
    println!("Available setup steps:");
    for (index, name, description) in registry.list() {
        println!("{:>3}. {:<24} {}", index + 1, name, description);
    }
}

/// One last look at what is about to run. EOF counts as a refusal.
fn confirm_run(registry: &Registry, selection: &Selection) -> Result<bool> {
    println!("\nAbout to install {} step(s):", selection.len());
    for &index in selection.indices() {
        if let Some(step) = registry.get(index) {
            println!("  • {}", step.name);
        }
    }
    print!("\nProceed with installation? (y/n): ");
    stdout().flush()?;

    let mut answer = String::new();
    if stdin().read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
