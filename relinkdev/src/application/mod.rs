pub mod handlers;

use crate::presentation::cli::{Cli, Commands, ConfigCommands};
use clap::Parser;
use relink_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            db,
            limit,
            dry_run,
            page_size,
            all_statuses,
            max_pages,
        } => handlers::handle_scan(db, limit, dry_run, page_size, all_statuses, max_pages),
        Commands::Run { db, config } => handlers::handle_run(db, config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { config } => handlers::handle_config_show(config),
            ConfigCommands::Set {
                config,
                enabled,
                dry_run,
                once,
                limit,
            } => handlers::handle_config_set(config, enabled, dry_run, once, limit),
        },
        Commands::Link { existing, new_link } => handlers::handle_link(existing, new_link),
        Commands::History {
            db,
            page,
            page_size,
            all_statuses,
        } => handlers::handle_history(db, page, page_size, all_statuses),
    }
}
