// src/rank/mod.rs
//! `PageRank` over a [`LinkGraph`](crate::graph::LinkGraph).

pub mod norm;
pub mod pagerank;

pub use pagerank::{Iteration, PageRankSolver};

use serde::{Deserialize, Serialize};

/// How each power-iteration step is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Execution {
    /// Push contributions along out-edges on one thread.
    Sequential,
    /// Pull contributions along in-edges with rayon.
    Parallel,
    /// `Parallel` at or above the configured node count, else `Sequential`.
    #[default]
    Auto,
}

/// Non-fatal conditions reported alongside a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverWarning {
    /// The graph had no nodes; no iteration ran.
    EmptyGraph,
}

/// Final rank vector and how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// One score per node id.
    pub ranks: Vec<f64>,
    /// Iterations performed.
    pub iterations: usize,
    /// L1 distance between the last two vectors.
    pub delta: f64,
    /// False when the iteration bound ran out first.
    pub converged: bool,
    pub warning: Option<SolverWarning>,
}

impl PageRankResult {
    #[must_use]
    pub fn new(ranks: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            ranks,
            iterations,
            delta,
            converged,
            warning: None,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            ranks: Vec::new(),
            iterations: 0,
            delta: 0.0,
            converged: true,
            warning: Some(SolverWarning::EmptyGraph),
        }
    }

    /// Score for a node id, or `None` if out of range.
    #[must_use]
    pub fn score(&self, node: usize) -> Option<f64> {
        self.ranks.get(node).copied()
    }

    /// Sum of all scores; 1.0 up to rounding for a non-empty graph.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.ranks.iter().sum()
    }

    /// Top `n` node ids by score, highest first, ties by lower id.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.ranks.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }
}
