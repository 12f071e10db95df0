use clap::Parser;

/// Tickerdock: a docked desktop viewer for a quote webpage.
#[derive(Parser, Debug)]
#[command(name = "tickerdock", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Quote page URL override.
    #[arg(long)]
    pub url: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable the auto-collapse behavior for this run.
    #[arg(long)]
    pub no_dock: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
