use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::rank::Execution;
use crate::reporting::ReportFormat;

/// `[solver]` table of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Teleport probability (lambda).
    #[serde(default = "default_damping", alias = "lambda")]
    pub damping: f64,
    /// L1 convergence threshold (tau).
    #[serde(default = "default_threshold", alias = "tau")]
    pub threshold: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub mode: Execution,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            threshold: default_threshold(),
            max_iterations: default_max_iterations(),
            mode: Execution::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_damping() -> f64 { 0.15 }
fn default_threshold() -> f64 { 1e-6 }
fn default_max_iterations() -> usize { 10_000 }
fn default_parallel_threshold() -> usize { 100_000 }

/// `[report]` table of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_inlinks_file")]
    pub inlinks_file: String,
    #[serde(default = "default_pagerank_file")]
    pub pagerank_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            out_dir: default_out_dir(),
            format: ReportFormat::default(),
            inlinks_file: default_inlinks_file(),
            pagerank_file: default_pagerank_file(),
        }
    }
}

fn default_top_k() -> usize { 50 }
fn default_out_dir() -> PathBuf { PathBuf::from(".") }
fn default_inlinks_file() -> String { "inlinks.txt".to_string() }
fn default_pagerank_file() -> String { "pagerank.txt".to_string() }

/// Top-level shape of `linkrank.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub report: ReportConfig,
}
