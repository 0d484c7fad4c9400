// src/rank/pagerank.rs
//! `PageRank` power iteration with teleportation and rank-sink redistribution.
//!
//! `damping` here is the teleport probability: each step a surfer jumps to a
//! uniformly random page with probability `damping` and follows a uniformly
//! chosen out-edge otherwise. Mass sitting on a page with no out-edges is
//! spread evenly over every page instead of being dropped, so each iteration
//! keeps the total at 1 without a renormalization pass.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::norm::{l1_distance, par_l1_distance};
use super::{Execution, PageRankResult};
use crate::error::{LinkRankError, Result};
use crate::graph::{Adjacency, LinkGraph};

/// Progress of one completed iteration.
#[derive(Debug, Clone, Copy)]
pub struct Iteration<'a> {
    /// 1-based iteration number.
    pub number: usize,
    /// L1 distance from the previous vector.
    pub delta: f64,
    /// The vector this iteration produced.
    pub ranks: &'a [f64],
}

/// Power-iteration `PageRank` solver.
#[derive(Debug, Clone)]
pub struct PageRankSolver {
    /// Teleport probability, strictly between 0 and 1.
    pub damping: f64,
    /// Stop once the L1 delta drops strictly below this.
    pub threshold: f64,
    /// Safety bound on the number of iterations.
    pub max_iterations: usize,
    pub execution: Execution,
    /// Node count at which `Execution::Auto` switches to parallel.
    pub parallel_threshold: usize,
}

impl Default for PageRankSolver {
    fn default() -> Self {
        Self {
            damping: 0.15,
            threshold: 1e-6,
            max_iterations: 10_000,
            execution: Execution::Auto,
            parallel_threshold: 100_000,
        }
    }
}

impl PageRankSolver {
    #[must_use]
    pub fn new(damping: f64, threshold: f64) -> Self {
        Self {
            damping,
            threshold,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, nodes: usize) -> Self {
        self.parallel_threshold = nodes;
        self
    }

    /// Checks the parameters without touching any graph.
    ///
    /// # Errors
    /// Returns error if `damping` is outside (0, 1), `threshold` is not a
    /// positive finite number, or `max_iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(LinkRankError::InvalidDamping(self.damping));
        }
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(LinkRankError::InvalidThreshold(self.threshold));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidIterationBound);
        }
        Ok(())
    }

    /// Runs to convergence.
    ///
    /// # Errors
    /// Returns a parameter error before iterating, or `DidNotConverge` with the
    /// last vector if `max_iterations` runs out.
    pub fn solve(&self, graph: &LinkGraph) -> Result<PageRankResult> {
        self.solve_observed(graph, |_| {})
    }

    /// Like [`PageRankSolver::solve`], calling `observer` after every iteration.
    ///
    /// # Errors
    /// Same as [`PageRankSolver::solve`].
    #[allow(clippy::cast_precision_loss)]
    pub fn solve_observed<F>(&self, graph: &LinkGraph, mut observer: F) -> Result<PageRankResult>
    where
        F: FnMut(Iteration<'_>),
    {
        self.validate()?;

        let n = graph.node_count();
        if n == 0 {
            warn!("empty graph, returning empty rank vector");
            return Ok(PageRankResult::empty());
        }

        let adjacency = graph.adjacency();
        let parallel = self.runs_parallel(n);
        let inbound = parallel.then(|| adjacency.transpose());
        let dangling: Vec<usize> = adjacency.dangling_nodes().collect();

        let mut prev = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        info!(
            nodes = n,
            edges = adjacency.edge_count(),
            dangling = dangling.len(),
            damping = self.damping,
            threshold = self.threshold,
            parallel,
            "solving pagerank"
        );

        let mut delta = f64::INFINITY;
        for number in 1..=self.max_iterations {
            let accumulated = self.sink_mass(&dangling, &prev);
            delta = match &inbound {
                Some(rev) => {
                    self.pull_step(adjacency, rev, accumulated, &prev, &mut next);
                    par_l1_distance(&prev, &next)
                }
                None => {
                    self.push_step(adjacency, accumulated, &prev, &mut next);
                    l1_distance(&prev, &next)
                }
            };
            debug!(iteration = number, delta, "pagerank step");
            observer(Iteration {
                number,
                delta,
                ranks: &next,
            });

            if delta < self.threshold {
                info!(iterations = number, delta, "pagerank converged");
                return Ok(PageRankResult::new(next, number, delta, true));
            }
            std::mem::swap(&mut prev, &mut next);
        }

        warn!(
            iterations = self.max_iterations,
            delta, "pagerank hit the iteration bound before converging"
        );
        Err(LinkRankError::DidNotConverge(Box::new(PageRankResult::new(
            prev,
            self.max_iterations,
            delta,
            false,
        ))))
    }

    fn runs_parallel(&self, nodes: usize) -> bool {
        match self.execution {
            Execution::Sequential => false,
            Execution::Parallel => true,
            Execution::Auto => nodes >= self.parallel_threshold,
        }
    }

    /// Mass held by pages without out-edges, already divided among all pages.
    #[allow(clippy::cast_precision_loss)]
    fn sink_mass(&self, dangling: &[usize], prev: &[f64]) -> f64 {
        let n = prev.len() as f64;
        let mut accumulated = 0.0;
        for &node in dangling {
            accumulated += (1.0 - self.damping) * prev[node] / n;
        }
        accumulated
    }

    /// Teleport term, then each page's walk mass pushed along its out-edges,
    /// then the sink mass added everywhere.
    #[allow(clippy::cast_precision_loss)]
    fn push_step(&self, adjacency: &Adjacency, accumulated: f64, prev: &[f64], next: &mut [f64]) {
        let n = prev.len() as f64;
        next.fill(self.damping / n);

        for (node, &rank) in prev.iter().enumerate() {
            let targets = adjacency.neighbors(node);
            if targets.is_empty() {
                continue;
            }
            let share = (1.0 - self.damping) * rank / targets.len() as f64;
            for &t in targets {
                next[t] += share;
            }
        }

        for r in next.iter_mut() {
            *r += accumulated;
        }
    }

    /// Same update as [`Self::push_step`], computed per target from its
    /// in-edges. Sources arrive in ascending id order, matching the push order.
    #[allow(clippy::cast_precision_loss)]
    fn pull_step(
        &self,
        adjacency: &Adjacency,
        inbound: &Adjacency,
        accumulated: f64,
        prev: &[f64],
        next: &mut [f64],
    ) {
        let n = prev.len() as f64;
        let teleport = self.damping / n;
        let walk = 1.0 - self.damping;

        next.par_iter_mut().enumerate().for_each(|(target, r)| {
            let incoming = inbound.neighbors(target).iter().fold(teleport, |acc, &src| {
                acc + walk * prev[src] / adjacency.out_degree(src) as f64
            });
            *r = incoming + accumulated;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, PageIndex};
    use crate::input::MemorySource;

    fn graph(pairs: &[(&str, &str)]) -> LinkGraph {
        GraphBuilder::build(&MemorySource::from_pairs(pairs.iter().copied())).unwrap()
    }

    fn dangling_only(n: usize) -> LinkGraph {
        let mut index = PageIndex::new();
        for i in 0..n {
            index.get_or_insert(&format!("p{i}"));
        }
        LinkGraph::new(index, Adjacency::from_lists(&vec![Vec::new(); n]))
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let g = graph(&[("a", "b")]);
        for damping in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = PageRankSolver::new(damping, 1e-6).solve(&g).unwrap_err();
            assert!(matches!(err, LinkRankError::InvalidDamping(_)));
        }
        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = PageRankSolver::new(0.15, threshold).solve(&g).unwrap_err();
            assert!(matches!(err, LinkRankError::InvalidThreshold(_)));
        }
        let err = PageRankSolver::new(0.15, 1e-6)
            .with_max_iterations(0)
            .solve(&g)
            .unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidIterationBound));
    }

    #[test]
    fn empty_graph_returns_empty_vector() {
        let result = PageRankSolver::new(0.15, 1e-6)
            .solve(&LinkGraph::default())
            .unwrap();
        assert!(result.ranks.is_empty());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.warning, Some(crate::rank::SolverWarning::EmptyGraph));
    }

    #[test]
    fn all_dangling_converges_in_one_step() {
        let result = PageRankSolver::new(0.3, 1e-9)
            .solve(&dangling_only(4))
            .unwrap();
        assert_eq!(result.iterations, 1);
        for r in &result.ranks {
            assert!((r - 0.25).abs() < 1e-15);
        }
    }

    #[test]
    fn two_cycle_is_balanced() {
        let g = graph(&[("a", "b"), ("b", "a")]);
        let result = PageRankSolver::new(0.15, 1e-6).solve(&g).unwrap();
        assert!((result.ranks[0] - 0.5).abs() < 1e-9);
        assert!((result.ranks[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn push_and_pull_agree() {
        let g = graph(&[
            ("a", "b"),
            ("a", "b"),
            ("a", "c"),
            ("c", "a"),
            ("d", "c"),
            ("b", "e"),
        ]);
        let seq = PageRankSolver::new(0.2, 1e-10)
            .with_execution(Execution::Sequential)
            .solve(&g)
            .unwrap();
        let par = PageRankSolver::new(0.2, 1e-10)
            .with_execution(Execution::Parallel)
            .solve(&g)
            .unwrap();
        for (s, p) in seq.ranks.iter().zip(&par.ranks) {
            assert!((s - p).abs() < 1e-12);
        }
    }

    #[test]
    fn bound_exhaustion_carries_last_vector() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "c")]);
        let err = PageRankSolver::new(0.15, 1e-12)
            .with_max_iterations(2)
            .solve(&g)
            .unwrap_err();
        match err {
            LinkRankError::DidNotConverge(result) => {
                assert_eq!(result.iterations, 2);
                assert!(!result.converged);
                assert_eq!(result.ranks.len(), 3);
                assert!((result.mass() - 1.0).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn auto_switches_on_node_count() {
        let solver = PageRankSolver::default().with_parallel_threshold(10);
        assert!(!solver.runs_parallel(9));
        assert!(solver.runs_parallel(10));
    }
}
