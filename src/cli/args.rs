use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::rank::Execution;
use crate::reporting::ReportFormat;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank for tab-separated link graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Log solver progress (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file to use instead of ./linkrank.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute PageRank and write the top-K reports
    Rank(RankArgs),
    /// Build the graph and print its size
    Stats {
        /// Edge list, plain or gzip-compressed
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// Edge list, plain or gzip-compressed
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Teleport probability, strictly between 0 and 1
    #[arg(value_name = "LAMBDA")]
    pub lambda: Option<f64>,
    /// L1 convergence threshold
    #[arg(value_name = "TAU")]
    pub tau: Option<f64>,
    /// Give up after this many iterations
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,
    #[arg(long, value_enum)]
    pub mode: Option<Execution>,
    /// Rows per report
    #[arg(long, short = 'k', value_name = "N")]
    pub top: Option<usize>,
    /// Directory for inlinks.txt and pagerank.txt
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Write reports from the last vector if the iteration bound runs out
    #[arg(long)]
    pub accept_unconverged: bool,
}
