use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "relinkdev: restore original media files from transfer history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the stored settings
    Show {
        #[arg(long)]
        config: PathBuf,
    },
    /// Change stored settings; omitted flags keep their value
    Set {
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        enabled: Option<bool>,
        /// dry run: log intended links only
        #[arg(long = "dry-run")]
        dry_run: Option<bool>,
        /// run once at the next `run`
        #[arg(long)]
        once: Option<bool>,
        /// handled-record budget (0 = whole history)
        #[arg(long)]
        limit: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the history and recreate missing sources as hard links
    Scan {
        /// host database holding the `transferhistory` table
        db: PathBuf,

        /// handled-record budget (0 = whole history)
        #[arg(long, default_value_t = 10)]
        limit: u64,

        #[arg(long = "dry-run")]
        dry_run: bool,

        #[arg(long = "page-size", default_value_t = 10)]
        page_size: u32,

        /// include failed transfers, not just successful ones
        #[arg(long = "all-statuses")]
        all_statuses: bool,

        /// stop after this many history pages
        #[arg(long = "max-pages")]
        max_pages: Option<u32>,
    },

    /// Startup pass: honor the run-once switch in the config file, then clear it
    Run {
        db: PathBuf,

        #[arg(long)]
        config: PathBuf,
    },

    #[command(subcommand)]
    /// Inspect or edit the stored settings
    Config(ConfigCommands),

    /// Hard-link one file to a new path and verify it
    Link { existing: PathBuf, new_link: PathBuf },

    /// Print one page of transfer history
    History {
        db: PathBuf,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long = "page-size", default_value_t = 10)]
        page_size: u32,

        #[arg(long = "all-statuses")]
        all_statuses: bool,
    },
}
