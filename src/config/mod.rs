// src/config/mod.rs
pub mod types;

pub use self::types::{Config, ReportConfig, SolverConfig};

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LinkRankError, Result};
use crate::rank::PageRankSolver;

pub const CONFIG_FILE: &str = "linkrank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `linkrank.toml` from the current directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads a config file, or defaults if `path` does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|source| LinkRankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses config text.
    ///
    /// # Errors
    /// Returns error on invalid TOML or mistyped fields.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the solver parameters are out of range.
    pub fn validate(&self) -> Result<()> {
        self.solver().validate()
    }

    /// Solver built from the `[solver]` table.
    #[must_use]
    pub fn solver(&self) -> PageRankSolver {
        let s = &self.solver;
        PageRankSolver::new(s.damping, s.threshold)
            .with_max_iterations(s.max_iterations)
            .with_execution(s.mode)
            .with_parallel_threshold(s.parallel_threshold)
    }

    /// Serializes back to TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LinkRankError::Config(e.to_string()))
    }
}
