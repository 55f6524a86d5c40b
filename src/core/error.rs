//! Error type shared by every layer of the crate.
//!
//! Construction errors (`InvalidInput`, `Parse`, `Io`) are fatal before a
//! game starts. `IllegalMove`, `Stall` and `ReplayMismatch` indicate a defect
//! in move selection or in a recorded script and halt the match. Running out
//! of plies is not an error; see [`Outcome::PlyLimitExceeded`].
//!
//! [`Outcome::PlyLimitExceeded`]: crate::engine::Outcome::PlyLimitExceeded

use crate::core::Role;
use crate::graph::{Edge, EdgeState};

/// Errors raised while building or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Malformed initial configuration: out-of-range node, degenerate
    /// terminal pair, self-edge or duplicate edge.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Color or delete attempted on an edge that is not `Normal`.
    #[error("illegal move on edge {edge}: edge is {state:?}")]
    IllegalMove {
        /// The edge that was targeted.
        edge: Edge,
        /// Its state at the time of the attempt.
        state: EdgeState,
    },

    /// No eligible edge remains although neither role has won.
    #[error("stalled at ply {ply}: no normal edges left and no winner")]
    Stall {
        /// Plies played before the stall.
        ply: usize,
    },

    /// A replayed script disagrees with the turn order.
    #[error("replay mismatch at ply {ply}: expected {expected} to move, script has {found}")]
    ReplayMismatch {
        /// Index of the offending ply.
        ply: usize,
        /// Role whose turn it actually is.
        expected: Role,
        /// Role recorded in the script.
        found: Role,
    },

    /// Malformed board description.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// A match record could not be encoded or decoded.
    #[error("match record error: {0}")]
    Record(String),

    /// Reading a board file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        GameError::Record(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
