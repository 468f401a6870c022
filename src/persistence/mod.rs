//! Saving and loading games.
//!
//! - [`codec`]: the byte layout (header + one byte per cell)
//! - [`Persistence`]: async trait the engine loads and saves through
//! - [`BinaryPersistence`]: the default implementation over `tokio` streams
//!   and files

pub mod codec;
mod store;

pub use store::{BinaryPersistence, Persistence};
