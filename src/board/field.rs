//! A single board cell.

use serde::Serialize;

use crate::core::Color;

/// One cell of the board.
///
/// The home color is painted when the board is built and never changes.
/// The occupant is the chameleon currently standing here (or `Empty`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Field {
    home: Color,
    occupant: Color,
}

impl Field {
    /// Create an unoccupied field with the given home color.
    #[must_use]
    pub(crate) const fn new(home: Color) -> Self {
        Self {
            home,
            occupant: Color::Empty,
        }
    }

    /// The fixed home color of this field.
    #[must_use]
    pub const fn home(&self) -> Color {
        self.home
    }

    /// The chameleon on this field, or `Empty`.
    #[must_use]
    pub const fn occupant(&self) -> Color {
        self.occupant
    }

    /// Check if no chameleon stands here.
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        matches!(self.occupant, Color::Empty)
    }

    /// A chameleon stands on the other faction's home square.
    ///
    /// The neutral center never counts.
    #[must_use]
    pub fn has_enemy_chameleon(&self) -> bool {
        self.home.is_player() && self.occupant.is_player() && self.home != self.occupant
    }

    /// Replace the occupant. Returns `true` only if the value changed.
    pub(crate) fn set_occupant(&mut self, color: Color) -> bool {
        if self.occupant == color {
            return false;
        }
        self.occupant = color;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_vacant() {
        let field = Field::new(Color::Green);
        assert_eq!(field.home(), Color::Green);
        assert_eq!(field.occupant(), Color::Empty);
        assert!(field.is_vacant());
    }

    #[test]
    fn test_set_occupant_reports_change() {
        let mut field = Field::new(Color::Red);

        assert!(field.set_occupant(Color::Red));
        assert!(!field.set_occupant(Color::Red));
        assert!(field.set_occupant(Color::Empty));
        assert!(field.is_vacant());
    }

    #[test]
    fn test_has_enemy_chameleon() {
        let mut field = Field::new(Color::Red);
        assert!(!field.has_enemy_chameleon());

        field.set_occupant(Color::Red);
        assert!(!field.has_enemy_chameleon());

        field.set_occupant(Color::Green);
        assert!(field.has_enemy_chameleon());

        let mut center = Field::new(Color::Empty);
        center.set_occupant(Color::Green);
        assert!(!center.has_enemy_chameleon());
    }
}
