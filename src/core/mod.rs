//! Core engine types: colors, players, coordinates, errors, configuration.
//!
//! These are the leaf types shared by the board, the engine and the
//! persistence layer.

pub mod color;
pub mod config;
pub mod coord;
pub mod error;

pub use color::{Color, PlayerId};
pub use config::{
    is_valid_board_size, Difficulty, GameConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};
pub use coord::{Coord, Direction};
pub use error::{ChameleonError, Result};
