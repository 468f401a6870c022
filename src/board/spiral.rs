//! Spiral home layout.
//!
//! Green's territory is a rectangular spiral that starts on the left edge,
//! runs up the full first column, then winds clockwise inward with arms of
//! length `size - 2, size - 2, size - 4, size - 4, ...` down to a final
//! single cell. Every other cell is Red's, except the center, which is
//! neutral.
//!
//! For `size = 5` (rows are `x`, columns are `y`):
//!
//! ```text
//! G G G G G
//! G R R R R
//! G R . G R
//! G G G G R
//! R R R R R
//! ```
//!
//! The layout is a pure function of `size`. Save files rely on this: they
//! store only occupants and regenerate home colors on load.

use crate::core::{Color, Coord, Direction};

/// Trace the Green spiral for a `size` x `size` board.
///
/// The caller must pass a valid (odd, >= 3) size.
#[must_use]
pub fn spiral_path(size: usize) -> Vec<Coord> {
    let n = size as i32;
    let mut path = Vec::with_capacity(size * (size + 1) / 2);

    // One step below the top-left corner, so the first step lands on (0, n - 1).
    let mut cursor = Coord::new(0, n);
    let mut dir = Direction::Up;

    walk(&mut cursor, dir, n, &mut path);

    let mut arm = n - 2;
    while arm > 1 {
        for _ in 0..2 {
            dir = dir.rotate();
            walk(&mut cursor, dir, arm, &mut path);
        }
        arm -= 2;
    }

    dir = dir.rotate();
    walk(&mut cursor, dir, 1, &mut path);

    path
}

fn walk(cursor: &mut Coord, dir: Direction, len: i32, path: &mut Vec<Coord>) {
    for _ in 0..len {
        *cursor = cursor.offset(dir, 1);
        path.push(*cursor);
    }
}

/// Home colors for every cell, row-major (`x * size + y`).
#[must_use]
pub fn home_layout(size: usize) -> Vec<Color> {
    let mut homes = vec![None; size * size];

    for coord in spiral_path(size) {
        if coord.in_bounds(size) {
            homes[coord.x as usize * size + coord.y as usize] = Some(Color::Green);
        }
    }

    let center = size / 2;
    homes
        .into_iter()
        .enumerate()
        .map(|(i, home)| match home {
            Some(color) => color,
            None if i / size == center && i % size == center => Color::Empty,
            None => Color::Red,
        })
        .collect()
}
