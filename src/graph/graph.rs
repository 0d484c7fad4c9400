// src/graph/graph.rs
//! The frozen link graph: page index plus compressed adjacency.

use super::index::PageIndex;

/// Out-edges of every node in compressed sparse row form.
///
/// Node `n`'s targets are `targets[offsets[n]..offsets[n + 1]]`, in the order
/// the edges appeared in the input. Parallel edges and self-loops are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl Adjacency {
    pub(crate) fn from_parts(offsets: Vec<usize>, targets: Vec<usize>) -> Self {
        debug_assert_eq!(offsets.first().copied(), Some(0));
        debug_assert_eq!(offsets.last().copied(), Some(targets.len()));
        Self { offsets, targets }
    }

    /// Builds from one target list per node. Mostly useful in tests.
    #[must_use]
    pub fn from_lists(lists: &[Vec<usize>]) -> Self {
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut targets = Vec::with_capacity(lists.iter().map(Vec::len).sum());
        offsets.push(0);
        for list in lists {
            targets.extend_from_slice(list);
            offsets.push(targets.len());
        }
        Self { offsets, targets }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Targets of `node`'s out-edges, duplicates included.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    #[must_use]
    pub fn out_degree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Nodes with no out-edges.
    pub fn dangling_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count()).filter(|&n| self.out_degree(n) == 0)
    }

    /// Number of incoming edges per node, multiplicity included.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut counts = vec![0; self.node_count()];
        for &t in &self.targets {
            counts[t] += 1;
        }
        counts
    }

    /// The reversed graph: node `t`'s slots list every source with an edge to `t`.
    #[must_use]
    pub fn transpose(&self) -> Adjacency {
        let n = self.node_count();
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        for count in self.in_degrees() {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        let mut cursor = offsets[..n].to_vec();
        let mut sources = vec![0; self.targets.len()];
        for src in 0..n {
            for &t in self.neighbors(src) {
                sources[cursor[t]] = src;
                cursor[t] += 1;
            }
        }
        Adjacency::from_parts(offsets, sources)
    }
}

impl Default for Adjacency {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
        }
    }
}

/// An indexed directed graph built from an edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    pub(crate) index: PageIndex,
    pub(crate) adjacency: Adjacency,
}

impl LinkGraph {
    /// Pairs an index with an adjacency of the same size.
    ///
    /// # Panics
    /// Panics if the two disagree on the node count.
    #[must_use]
    pub fn new(index: PageIndex, adjacency: Adjacency) -> Self {
        assert_eq!(
            index.len(),
            adjacency.node_count(),
            "page index and adjacency must cover the same nodes"
        );
        Self { index, adjacency }
    }

    #[must_use]
    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Out-neighbors of a page by name, or `None` if the page is unknown.
    #[must_use]
    pub fn links_from(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.index.id(name)?;
        Some(
            self.adjacency
                .neighbors(id)
                .iter()
                .filter_map(|&t| self.index.name(t))
                .collect(),
        )
    }

    #[must_use]
    pub fn dangling_count(&self) -> usize {
        self.adjacency.dangling_nodes().count()
    }
}
