//! The board: a square grid of fields plus whose turn it is.
//!
//! ## Layout
//!
//! Fields are stored row-major by `x` (`x * size + y`), the same order the
//! save format uses. Home colors come from [`super::spiral::home_layout`].
//!
//! ## Ownership of game rules
//!
//! `Board` knows geometry only. It never moves chameleons by itself and
//! starts with every field vacant; placing the starting chameleons and
//! executing moves is the engine's job.

use rustc_hash::FxHashSet;

use super::field::Field;
use super::spiral::home_layout;
use crate::core::{is_valid_board_size, ChameleonError, Color, Coord, PlayerId, Result};

/// Square game board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    fields: Vec<Field>,
    current_player: PlayerId,
}

impl Board {
    /// Create a board with Green to move.
    ///
    /// Fails with `InvalidBoard` unless `size` is odd and at least 3.
    ///
    /// ```
    /// use chameleon::board::Board;
    /// use chameleon::core::{Color, Coord};
    ///
    /// let board = Board::new(5).unwrap();
    /// assert_eq!(board.field(Coord::new(2, 2)).unwrap().home(), Color::Empty);
    /// assert!(Board::new(4).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        Self::with_player(size, PlayerId::GREEN.index())
    }

    /// Create a board with the given player (0 or 1) to move.
    pub fn with_player(size: usize, player: u8) -> Result<Self> {
        let current_player = PlayerId::new(player)
            .filter(|_| is_valid_board_size(size))
            .ok_or(ChameleonError::InvalidBoard { size, player })?;

        let fields = home_layout(size).into_iter().map(Field::new).collect();

        Ok(Self {
            size,
            fields,
            current_player,
        })
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The color of the player whose turn it is.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.current_player.color()
    }

    /// Hand the turn to the other player.
    pub(crate) fn change_current_player(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// The neutral center square.
    #[must_use]
    pub fn center(&self) -> Coord {
        let c = (self.size / 2) as i32;
        Coord::new(c, c)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        coord
            .in_bounds(self.size)
            .then(|| coord.x as usize * self.size + coord.y as usize)
    }

    fn coord_of_index(&self, index: usize) -> Coord {
        Coord::new((index / self.size) as i32, (index % self.size) as i32)
    }

    /// Get the field at `coord`, or `None` if it is off the board.
    #[must_use]
    pub fn field(&self, coord: Coord) -> Option<&Field> {
        self.index(coord).map(|i| &self.fields[i])
    }

    /// Put `color` on the field at `coord`.
    ///
    /// Returns whether the occupant actually changed. Off-board
    /// coordinates yield `NotFound`.
    pub fn set_occupant(&mut self, coord: Coord, color: Color) -> Result<bool> {
        let index = self.index(coord).ok_or_else(|| {
            ChameleonError::not_found(format!("field {} on a {}x{} board", coord, self.size, self.size))
        })?;
        Ok(self.fields[index].set_occupant(color))
    }

    /// Find where a field lives on this board.
    ///
    /// Matches by identity, so a field borrowed from another board is
    /// `NotFound` even if its colors are equal.
    pub fn coordinates_of(&self, field: &Field) -> Result<Coord> {
        self.fields
            .iter()
            .position(|f| std::ptr::eq(f, field))
            .map(|i| self.coord_of_index(i))
            .ok_or_else(|| ChameleonError::not_found("field is not part of this board"))
    }

    /// Iterate over all fields in row-major order.
    pub fn fields(&self) -> impl Iterator<Item = (Coord, &Field)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .map(move |(i, f)| (self.coord_of_index(i), f))
    }

    /// Count the chameleons of `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.fields.iter().filter(|f| f.occupant() == color).count()
    }

    /// The sole remaining chameleon color, if only one is left.
    ///
    /// A board with no chameleons, or with both colors, has no winner.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        let remaining: FxHashSet<Color> = self
            .fields
            .iter()
            .map(Field::occupant)
            .filter(|c| c.is_player())
            .collect();

        if remaining.len() == 1 {
            remaining.into_iter().next()
        } else {
            None
        }
    }

    /// Fields where a `color` chameleon stands on the other faction's home.
    ///
    /// In engine-reachable positions this yields at most one field per color.
    pub fn foreign_occupied(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        self.fields()
            .filter(move |(_, f)| f.occupant() == color && f.has_enemy_chameleon())
            .map(|(c, _)| c)
    }
}

/// Text rendering, one row per `x`.
///
/// Chameleons are `G`/`R`; vacant fields show their home in lowercase
/// (`g`/`r`) and the neutral center as `+`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.fields.chunks(self.size) {
            let line: String = row
                .iter()
                .map(|field| match (field.occupant(), field.home()) {
                    (Color::Green, _) => 'G',
                    (Color::Red, _) => 'R',
                    (Color::Empty, Color::Green) => 'g',
                    (Color::Empty, Color::Red) => 'r',
                    (Color::Empty, Color::Empty) => '+',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
