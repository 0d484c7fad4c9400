// src/reporting/mod.rs
//! Top-K report files and the terminal summary.

pub mod console;
pub mod shared;
pub mod topk;

pub use console::print_summary;
pub use topk::{top_inlinks, top_pageranks, write_report, Entry};

use serde::{Deserialize, Serialize};

/// Output format for report files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width columns: name, rank, value.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}
