//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

/// hnview - A fast terminal reader for the Hacker News top stories
#[derive(Parser, Debug)]
#[command(name = "hnview")]
#[command(version)]
#[command(about = "A fast terminal reader for the Hacker News top stories", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Read settings from this file instead of ~/.config/hnview/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print stories whose title contains TERM and exit (no TUI)
    #[arg(short, long, value_name = "TERM", conflicts_with = "domain")]
    pub search: Option<String>,

    /// Print stories from the domain of URL and exit (no TUI); a bare host is accepted
    #[arg(short, long, value_name = "URL")]
    pub domain: Option<String>,

    /// Print the unfiltered top stories and exit (no TUI)
    #[arg(long)]
    pub print: bool,

    /// Number of pages to print in print mode
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub pages: u16,
}

impl Args {
    /// What: Whether a one-shot print mode was requested instead of the TUI.
    #[must_use]
    pub const fn wants_print(&self) -> bool {
        self.print || self.search.is_some() || self.domain.is_some()
    }
}
