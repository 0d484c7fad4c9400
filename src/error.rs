// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::rank::PageRankResult;

#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed edge on line {line}: expected `source<TAB>target`, got {content:?}")]
    MalformedEdge { line: usize, content: String },

    #[error("Edge source changed between passes: {0}")]
    SourceChanged(String),

    #[error("Damping factor must lie strictly between 0 and 1 (got {0})")]
    InvalidDamping(f64),

    #[error("Convergence threshold must be positive and finite (got {0})")]
    InvalidThreshold(f64),

    #[error("Iteration bound must be at least 1")]
    InvalidIterationBound,

    #[error(
        "PageRank did not converge after {} iterations (last L1 delta {:e})",
        .0.iterations,
        .0.delta
    )]
    DidNotConverge(Box<PageRankResult>),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LinkRankError {
    /// True for errors caused by bad solver parameters.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidDamping(_)
                | Self::InvalidThreshold(_)
                | Self::InvalidIterationBound
                | Self::Config(_)
        )
    }

    /// True for errors caused by the edge stream itself.
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, Self::MalformedEdge { .. } | Self::SourceChanged(_))
    }
}

pub type Result<T> = std::result::Result<T, LinkRankError>;

// Allow `?` on std::io::Error by converting to LinkRankError::Io with unknown path.
impl From<std::io::Error> for LinkRankError {
    fn from(source: std::io::Error) -> Self {
        LinkRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for LinkRankError {
    fn from(e: toml::de::Error) -> Self {
        LinkRankError::Config(e.to_string())
    }
}
