//! Game configuration types.
//!
//! Embedding applications configure the engine at startup by providing:
//! - `Difficulty`: Named board-size presets offered by a new-game menu
//! - `GameConfig`: The board size an engine starts with
//!
//! Board sizes are validated here with the same rule `Board` enforces,
//! so a bad configuration fails before any board is built.

use serde::{Deserialize, Serialize};

use super::error::{ChameleonError, Result};

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board the save format can describe (size is stored in one byte).
pub const MAX_BOARD_SIZE: usize = 255;

/// Board size used when no configuration is given.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Check whether `size` is a playable board size: odd, at least 3 and
/// representable in the save header.
#[must_use]
pub fn is_valid_board_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) && size % 2 == 1
}

/// New-game presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 3x3 board.
    Easy,
    /// 5x5 board.
    #[default]
    Medium,
    /// 7x7 board.
    Hard,
}

impl Difficulty {
    /// All presets, smallest board first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Board size for this preset.
    #[must_use]
    pub const fn board_size(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }

    /// Find the preset matching a board size, if any.
    #[must_use]
    pub fn from_board_size(size: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.board_size() == size)
    }
}

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use chameleon::core::{Difficulty, GameConfig};
///
/// let config = GameConfig::new().with_difficulty(Difficulty::Hard);
/// assert_eq!(config.board_size, 7);
/// assert!(config.validate().is_ok());
///
/// assert!(GameConfig::new().with_board_size(4).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Size of the board an engine starts with.
    pub board_size: usize,
}

impl GameConfig {
    /// Create a configuration with the default board size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }

    /// Set the starting board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the starting board size from a preset.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.board_size = difficulty.board_size();
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if is_valid_board_size(self.board_size) {
            Ok(())
        } else {
            Err(ChameleonError::InvalidBoard {
                size: self.board_size,
                player: 0,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_board_sizes() {
        assert!(is_valid_board_size(3));
        assert!(is_valid_board_size(5));
        assert!(is_valid_board_size(255));

        assert!(!is_valid_board_size(0));
        assert!(!is_valid_board_size(1));
        assert!(!is_valid_board_size(4));
        assert!(!is_valid_board_size(257));
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.board_size(), 3);
        assert_eq!(Difficulty::default().board_size(), 5);
        assert_eq!(Difficulty::from_board_size(7), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_board_size(9), None);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new().with_board_size(9);
        assert_eq!(config.board_size, 9);
        assert!(config.validate().is_ok());

        assert_eq!(GameConfig::default().board_size, DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn test_config_validation() {
        let err = GameConfig::new().with_board_size(6).validate().unwrap_err();
        assert_eq!(err, ChameleonError::InvalidBoard { size: 6, player: 0 });
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_difficulty(Difficulty::Easy);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
