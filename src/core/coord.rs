//! Board coordinates and walking directions.
//!
//! Coordinates are signed so that callers can describe moves that leave the
//! board (e.g. `(6, -1)`); such requests are rejected by validation rather
//! than being unrepresentable. `x` is the first grid index, `y` the second.

use serde::{Deserialize, Serialize};

/// A board coordinate `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move `steps` cells in `dir`.
    ///
    /// Plain `i32` arithmetic: overflows near the `i32` limits. Use
    /// [`Coord::checked_translate`] for caller-supplied coordinates.
    #[must_use]
    pub const fn offset(self, dir: Direction, steps: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// Shift by `(dx, dy)`, or `None` if either component overflows.
    #[must_use]
    pub const fn checked_translate(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Check if this coordinate lies on a `size` x `size` board.
    #[must_use]
    pub fn in_bounds(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Walking direction used when tracing the spiral layout.
///
/// `Up` decreases `y`, `Right` increases `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Turn 90 degrees clockwise: Up -> Right -> Down -> Left -> Up.
    #[must_use]
    pub const fn rotate(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Unit step `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}
