//! Game orchestration.
//!
//! [`GameEngine`] owns one [`Board`](crate::board::Board) at a time,
//! validates and executes moves, applies the conversion rule, and reports
//! every change through [`GameEvent`]s and [`StepOutcome`]s.
//!
//! The engine does no locking. Callers serialize `step`, `load_game` and
//! `save_game` per engine (one owner, or an external mutex).

mod event;
mod game;

pub use event::{FieldChange, FieldChanges, GameEvent, GameListener, ListenerId};
pub use game::{GameEngine, StepOutcome};
