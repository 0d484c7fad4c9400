// src/graph/mod.rs
pub mod builder;
pub mod graph;
pub mod index;

pub use builder::GraphBuilder;
pub use graph::{Adjacency, LinkGraph};
pub use index::PageIndex;
