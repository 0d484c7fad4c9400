// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::LinkRankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Ranks computed and reports written.
    Success = 0,
    /// Generic error (e.g. IO, report write failure).
    Error = 1,
    /// The edge stream was malformed or changed between passes.
    InvalidInput = 2,
    /// Solver parameters or config file were invalid.
    ConfigError = 3,
    /// The iteration bound ran out before the L1 criterion was met.
    DidNotConverge = 4,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Maps an error chain to its exit code by looking for a `LinkRankError`.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LinkRankError>() {
            Some(e) if e.is_input() => Self::InvalidInput,
            Some(e) if e.is_config() => Self::ConfigError,
            Some(LinkRankError::DidNotConverge(_)) => Self::DidNotConverge,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_edge_maps_to_invalid_input() {
        let err = anyhow::Error::new(LinkRankError::MalformedEdge {
            line: 3,
            content: "a".into(),
        });
        assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::InvalidInput);
    }

    #[test]
    fn bad_damping_maps_to_config_error() {
        let err = anyhow::Error::new(LinkRankError::InvalidDamping(1.5));
        assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::ConfigError);
    }

    #[test]
    fn foreign_errors_are_generic() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::Error);
    }
}
