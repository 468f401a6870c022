//! Chameleon colors and player identification.
//!
//! ## Color
//!
//! Every field carries two colors: the fixed home color painted on the
//! board, and the color of the chameleon standing on it. `Color::Empty`
//! stands for "no chameleon" or for the neutral center square.
//!
//! ## PlayerId
//!
//! Type-safe player identifier for the two seats. Player 0 is Green and
//! always moves first on a new board; player 1 is Red.

use serde::{Deserialize, Serialize};

/// Chameleon or home-square color.
///
/// The discriminants are the ordinals used by the binary save format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    /// The first player's faction.
    Green = 0,
    /// The second player's faction.
    Red = 1,
    /// No chameleon, or the neutral center square.
    Empty = 2,
}

impl Color {
    /// Get the save-format ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Parse a save-format ordinal. Returns `None` for anything above 2.
    #[must_use]
    pub const fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Color::Green),
            1 => Some(Color::Red),
            2 => Some(Color::Empty),
            _ => None,
        }
    }

    /// The opposing faction. `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Green => Color::Red,
            Color::Red => Color::Green,
            Color::Empty => Color::Empty,
        }
    }

    /// Check if this is a player color (not `Empty`).
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Color::Empty)
    }

    /// The player who controls chameleons of this color.
    #[must_use]
    pub const fn player(self) -> Option<PlayerId> {
        match self {
            Color::Green => Some(PlayerId::GREEN),
            Color::Red => Some(PlayerId::RED),
            Color::Empty => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// Player identifier: 0 (Green) or 1 (Red).
///
/// Construct through [`PlayerId::new`], which rejects anything else.
///
/// ```
/// use chameleon::core::{Color, PlayerId};
///
/// let first = PlayerId::new(0).unwrap();
/// assert_eq!(first.color(), Color::Green);
/// assert_eq!(first.other(), PlayerId::RED);
/// assert!(PlayerId::new(2).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The Green player (moves first).
    pub const GREEN: PlayerId = PlayerId(0);

    /// The Red player.
    pub const RED: PlayerId = PlayerId(1);

    /// Create a player ID from its raw index.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        match id {
            0 | 1 => Some(Self(id)),
            _ => None,
        }
    }

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The color this player moves.
    #[must_use]
    pub const fn color(self) -> Color {
        if self.0 == 0 {
            Color::Green
        } else {
            Color::Red
        }
    }

    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("player id must be 0 or 1, got {}", value))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::GREEN
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} ({})", self.0, self.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ordinals() {
        assert_eq!(Color::Green.ordinal(), 0);
        assert_eq!(Color::Red.ordinal(), 1);
        assert_eq!(Color::Empty.ordinal(), 2);

        assert_eq!(Color::from_ordinal(1), Some(Color::Red));
        assert_eq!(Color::from_ordinal(3), None);
    }

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Green.opponent(), Color::Red);
        assert_eq!(Color::Red.opponent(), Color::Green);
        assert_eq!(Color::Empty.opponent(), Color::Empty);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Green.to_string(), "Green");
        assert_eq!(Color::Empty.to_string(), "Empty");
    }

    #[test]
    fn test_player_id_basics() {
        let green = PlayerId::new(0).unwrap();
        let red = PlayerId::new(1).unwrap();

        assert_eq!(green, PlayerId::GREEN);
        assert_eq!(red.index(), 1);
        assert_eq!(red.color(), Color::Red);
        assert_eq!(green.other(), red);
        assert_eq!(red.other(), green);
        assert_eq!(format!("{}", red), "Player 1 (Red)");
    }

    #[test]
    fn test_player_id_rejects_out_of_range() {
        assert!(PlayerId::new(2).is_none());
        assert!(PlayerId::new(255).is_none());
    }

    #[test]
    fn test_player_id_serde_validates() {
        let json = serde_json::to_string(&PlayerId::RED).unwrap();
        assert_eq!(json, "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::GREEN);
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    fn test_color_player_mapping() {
        assert_eq!(Color::Green.player(), Some(PlayerId::GREEN));
        assert_eq!(Color::Red.player(), Some(PlayerId::RED));
        assert_eq!(Color::Empty.player(), None);
    }
}
