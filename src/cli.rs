use clap::Parser;

/// macsetup - provision a macOS development environment
#[derive(Parser)]
#[command(name = "macsetup")]
#[command(about = "Install and configure a complete macOS development environment")]
#[command(version)]
pub struct Cli {
    /// Install every step without showing the selection menu
    #[arg(short, long)]
    pub all: bool,

    /// Print the step catalog and exit without installing anything
    #[arg(short, long)]
    pub list: bool,

    /// Comma-separated step numbers to install (e.g. "1,3,5")
    #[arg(short, long, value_name = "INDICES", conflicts_with = "all")]
    pub select: Option<String>,

    /// Skip the confirmation prompt before installation begins
    #[arg(long)]
    pub no_confirm: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
