//! Error type shared by every stage of a simulation run.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Any failure aborts the whole run; no partial report is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Wrong token count, a non-integer coordinate, or too few lines.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("illegal world size {x} {y}: each coordinate must be between 0 and {max}")]
    InvalidWorldSize { x: i32, y: i32, max: i32 },

    #[error("illegal starting position {x} {y}: outside the grid")]
    IllegalStartingPosition { x: i32, y: i32 },

    #[error("compass point {0:?} unknown")]
    UnknownCompassPoint(String),

    #[error("illegal command {0:?}")]
    IllegalCommand(char),
}

impl SimulationError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
