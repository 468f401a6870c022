//! # chameleon
//!
//! A deterministic engine for the two-player chameleon board game.
//!
//! ## Rules in brief
//!
//! - The board is an odd-sized square. Green's home squares form a spiral
//!   that winds inward from the left edge; the rest belong to Red, except
//!   the neutral center.
//! - Each home square starts with a chameleon of its own color, so the
//!   center is the only vacant field. Green moves first.
//! - A chameleon slides one cell along a row or column onto a vacant field,
//!   or jumps two cells over an opposing chameleon, removing it.
//! - A chameleon left on the enemy's home square converts to that color
//!   after its owner's next move.
//! - The game ends when only one color remains on the board.
//!
//! ## Modules
//!
//! - `core`: Colors, players, coordinates, errors, configuration
//! - `board`: Fields, the spiral home layout, the board grid
//! - `engine`: Move validation and execution, turn handling, notifications
//! - `persistence`: Binary save format and async load/save
//!
//! ## Example
//!
//! ```
//! use chameleon::core::{Color, GameConfig};
//! use chameleon::engine::GameEngine;
//!
//! let mut engine = GameEngine::new(GameConfig::new().with_board_size(3)).unwrap();
//!
//! engine.step((1, 0), (1, 1)).unwrap(); // Green into the center
//! engine.step((1, 2), (1, 0)).unwrap(); // Red jumps it
//!
//! assert_eq!(engine.get_field(1, 1).unwrap().occupant(), Color::Empty);
//! assert_eq!(engine.get_field(1, 0).unwrap().occupant(), Color::Red);
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod persistence;

// Re-export commonly used types
pub use crate::core::{
    ChameleonError, Color, Coord, Difficulty, Direction, GameConfig, PlayerId, Result,
};

pub use crate::board::{Board, Field};

pub use crate::engine::{
    FieldChange, FieldChanges, GameEngine, GameEvent, GameListener, ListenerId, StepOutcome,
};

pub use crate::persistence::{BinaryPersistence, Persistence};
