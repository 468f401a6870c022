//! Board geometry: fields, the spiral home layout and the grid itself.
//!
//! - [`Field`]: one cell (fixed home color, current occupant)
//! - [`spiral`]: the procedural home layout shared by new games and loads
//! - [`Board`]: the grid, turn tracking and winner detection

mod field;
mod grid;
pub mod spiral;

pub use field::Field;
pub use grid::Board;
