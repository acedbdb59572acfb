use crate::error::{Result, ScrapeError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a JSON file overriding the built-in team list
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Write the JSON document to this file instead of stdout
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Verbose logging, same as --log-level debug
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(long, global = true, conflicts_with = "debug")]
    pub silent: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Scrape the federation website and print every match, grouped by team
    Matches {
        /// Keep only the next match of each team
        #[arg(long)]
        next: bool,
    },
    /// Print the matches played next weekend
    NextWeekend,
    /// Print the teams the bot follows
    Teams,
}

impl Args {
    /// The subcommand to run, `matches` when none is given.
    pub fn subcommand(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Matches { next: false })
    }

    /// `--silent` wins over everything, then `--debug`, then `--log-level`.
    pub fn log_level(&self) -> Result<Level> {
        if self.silent {
            return Ok(Level::ERROR);
        }
        if self.debug {
            return Ok(Level::DEBUG);
        }
        Level::from_str(&self.log_level)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", self.log_level, e)))
    }
}
