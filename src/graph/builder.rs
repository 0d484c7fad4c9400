// src/graph/builder.rs
//! Graph construction: id assignment pass, then adjacency pass.

use tracing::{debug, info};

use super::graph::{Adjacency, LinkGraph};
use super::index::PageIndex;
use crate::error::{LinkRankError, Result};
use crate::input::{parse_edge, EdgeSource};

/// Builds a [`LinkGraph`] from two passes over the same edge lines.
///
/// [`GraphBuilder::scan`] assigns ids and counts out-degrees.
/// [`GraphBuilder::link`] consumes the builder, so the index is frozen before
/// any adjacency slot is filled.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    index: PageIndex,
    out_degree: Vec<usize>,
    edges: usize,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs both passes over a replayable source.
    ///
    /// # Errors
    /// Returns error on I/O failure, a malformed line, or a source that yields
    /// different edges on the second pass.
    pub fn build<S: EdgeSource + ?Sized>(source: &S) -> Result<LinkGraph> {
        let mut builder = Self::new();
        builder.scan(source.lines()?)?;
        builder.link(source.lines()?)
    }

    /// First pass: ids in first-occurrence order, source before target.
    ///
    /// # Errors
    /// Returns error on I/O failure or a malformed line.
    pub fn scan<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        for (i, line) in lines.into_iter().enumerate() {
            let line = line?;
            let edge = parse_edge(i + 1, &line)?;
            let src = self.intern(edge.source);
            self.intern(edge.target);
            self.out_degree[src] += 1;
            self.edges += 1;
        }
        debug!(pages = self.index.len(), edges = self.edges, "scan pass complete");
        Ok(())
    }

    fn intern(&mut self, name: &str) -> usize {
        let id = self.index.get_or_insert(name);
        if id == self.out_degree.len() {
            self.out_degree.push(0);
        }
        id
    }

    /// Second pass: append each target id to its source's slot, in edge order.
    ///
    /// # Errors
    /// Returns error on I/O failure, a malformed line, or if the lines differ
    /// from those seen by [`GraphBuilder::scan`].
    pub fn link<I>(self, lines: I) -> Result<LinkGraph>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut offsets = Vec::with_capacity(self.out_degree.len() + 1);
        offsets.push(0);
        for &d in &self.out_degree {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + d);
        }

        let mut cursor = offsets[..self.out_degree.len()].to_vec();
        let mut targets = vec![0; self.edges];
        let mut seen = 0;

        for (i, line) in lines.into_iter().enumerate() {
            let line = line?;
            let edge = parse_edge(i + 1, &line)?;
            let src = self.lookup(edge.source)?;
            let dst = self.lookup(edge.target)?;
            if cursor[src] == offsets[src + 1] {
                return Err(LinkRankError::SourceChanged(format!(
                    "line {} adds an edge the first pass did not count",
                    i + 1
                )));
            }
            targets[cursor[src]] = dst;
            cursor[src] += 1;
            seen += 1;
        }

        if seen != self.edges {
            return Err(LinkRankError::SourceChanged(format!(
                "second pass saw {seen} edges, first pass saw {}",
                self.edges
            )));
        }

        info!(
            pages = self.index.len(),
            edges = self.edges,
            "link graph built"
        );
        Ok(LinkGraph::new(
            self.index,
            Adjacency::from_parts(offsets, targets),
        ))
    }

    fn lookup(&self, name: &str) -> Result<usize> {
        self.index
            .id(name)
            .ok_or_else(|| LinkRankError::SourceChanged(format!("unknown page {name:?}")))
    }
}
