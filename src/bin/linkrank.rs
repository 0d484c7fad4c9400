// src/bin/linkrank.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use linkrank_core::cli::{dispatch, Cli};
use linkrank_core::config::Config;
use linkrank_core::error::LinkRankError;
use linkrank_core::exit::LinkRankExit;

fn main() -> LinkRankExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LinkRankExit::for_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<LinkRankExit> {
    let config = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(LinkRankError::Config(format!("{} not found", path.display())).into());
        }
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    dispatch::execute(&cli.command, config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "linkrank_core=debug" } else { "linkrank_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
