//! `PageRank` over tab-separated link graphs.
//!
//! Build a [`graph::LinkGraph`] from a replayable [`input::EdgeSource`] with
//! [`graph::GraphBuilder`], then rank it with [`rank::PageRankSolver`].

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod input;
pub mod rank;
pub mod reporting;

pub use error::{LinkRankError, Result};
pub use graph::{GraphBuilder, LinkGraph, PageIndex};
pub use input::{EdgeSource, FileSource, MemorySource};
pub use rank::{Execution, PageRankResult, PageRankSolver};
