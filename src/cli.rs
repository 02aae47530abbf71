use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "events-calendar", version, about = "Community events calendar in the terminal")]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Events document, overrides `data_file` from the settings
    #[arg(long)]
    pub data: Option<PathBuf>,
    /// Only show these category ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<String>,
    /// View state as a URL query, e.g. "categories=party&month=3"
    #[arg(long)]
    pub state: Option<String>,
    /// Flip these category filters on or off, like pressing the filter buttons
    #[arg(long, value_delimiter = ',')]
    pub toggle: Vec<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Twelve month overview plus the unconfirmed events
    Year,
    /// Full grid for one month
    Month {
        /// Month number, 1-12
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// Month after the one in `--state`, wrapping within the year
    Next,
    /// Month before the one in `--state`, wrapping within the year
    Prev,
    /// Flat table of every event
    List,
    /// Category filter panel
    Categories,
    /// Details of a single event
    Show {
        /// Event id
        id: String,
    },
}
