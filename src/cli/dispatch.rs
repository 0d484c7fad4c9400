//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_config, handle_rank, handle_stats},
};
use crate::config::Config;
use crate::exit::LinkRankExit;
use anyhow::Result;

/// Executes the parsed command against an already loaded config.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: &Commands, config: Config) -> Result<LinkRankExit> {
    match command {
        Commands::Rank(args) => handle_rank(args, config),
        Commands::Stats { file } => handle_stats(file),
        Commands::Config => handle_config(&config),
    }
}
