//! Engine error types.
//!
//! Every failure the engine can report is one of four kinds:
//! - `InvalidBoard`: a board was requested with an unusable size or player.
//! - `IllegalMove`: `step` was asked for a move that fails validation.
//!   Nothing is mutated before validation, so the board is unchanged.
//! - `DataCorruption`: a save stream was malformed, truncated or unreadable.
//!   The engine's in-memory game is left untouched.
//! - `NotFound`: a field lookup referenced something outside the board.

use derive_more::{Display, Error};

use super::coord::Coord;

/// Errors raised by board construction, move execution and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ChameleonError {
    /// Board size must be odd and at least 3; player id must be 0 or 1.
    #[display("invalid board: size {size}, player {player} (size must be odd and >= 3, player 0 or 1)")]
    InvalidBoard { size: usize, player: u8 },

    /// The requested move is not legal in the current position.
    #[display("illegal step from {src} to {dest}")]
    IllegalMove { src: Coord, dest: Coord },

    /// Save data could not be read or written.
    #[display("corrupt save data: {reason}")]
    DataCorruption { reason: String },

    /// The referenced field does not belong to the current board.
    #[display("not found: {what}")]
    NotFound { what: String },
}

impl ChameleonError {
    /// Build a `DataCorruption` error.
    pub fn corruption(reason: impl Into<String>) -> Self {
        Self::DataCorruption {
            reason: reason.into(),
        }
    }

    /// Build a `NotFound` error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}

impl From<std::io::Error> for ChameleonError {
    fn from(err: std::io::Error) -> Self {
        Self::corruption(format!("I/O error: {}", err))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChameleonError>;
