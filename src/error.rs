//! Error types for the minimax crate.

use std::fmt;

use thiserror::Error;

/// Why a move was refused by [`Board::apply`](crate::board::Board::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRejection {
    /// The coordinates lie outside the board.
    OutOfRange,
    /// The target cell already holds a mark.
    Occupied,
}

impl fmt::Display for ActionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionRejection::OutOfRange => f.write_str("coordinates are out of range"),
            ActionRejection::Occupied => f.write_str("target cell is already occupied"),
        }
    }
}

/// Main error type for the crate.
///
/// Every variant signals a broken precondition on the caller's side. Nothing
/// is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A move targeted a cell off the grid or one that is already marked.
    #[error("invalid action ({row}, {col}): {reason}")]
    InvalidAction {
        row: usize,
        col: usize,
        reason: ActionRejection,
    },

    /// Utility was asked for while the game is still running.
    #[error("utility requested for a board that is not terminal")]
    NotTerminal,

    /// A move was asked for after the game ended.
    #[error("no legal moves: the game is already over")]
    NoLegalMoves,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
