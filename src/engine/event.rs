//! Engine notifications.
//!
//! The engine reports what happened in two ways:
//! - Every successful `step` returns the list of [`FieldChange`]s it made.
//! - Subscribed [`GameListener`]s receive a [`GameEvent`] for each change,
//!   synchronously and in the order the mutations happened.
//!
//! Listeners only ever see `&GameEvent`; they cannot reach back into the
//! engine while it is notifying them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Coord, PlayerId};

/// A cell whose occupant changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldChange {
    /// Where the change happened.
    pub coord: Coord,
    /// The new occupant.
    pub color: Color,
}

impl FieldChange {
    /// Create a new field change.
    #[must_use]
    pub const fn new(coord: Coord, color: Color) -> Self {
        Self { coord, color }
    }
}

/// Cells changed by one move.
///
/// A step touches at most four cells (source, destination, jumped cell,
/// converted chameleon).
pub type FieldChanges = SmallVec<[FieldChange; 4]>;

/// Something observable happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new board was started or loaded; redraw everything.
    GameLoaded,
    /// A field's occupant changed.
    FieldChanged(FieldChange),
    /// The turn passed to `player`.
    CurrentPlayerChanged { player: PlayerId },
    /// Only `winner`'s chameleons remain.
    GameOver { winner: Color },
}

impl GameEvent {
    /// Create a field-changed event.
    #[must_use]
    pub fn field_changed(coord: Coord, color: Color) -> Self {
        Self::FieldChanged(FieldChange::new(coord, color))
    }
}

/// Receiver of engine notifications.
///
/// Implemented for every `FnMut(&GameEvent)`, so closures can subscribe
/// directly.
pub trait GameListener {
    /// Called once per event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Registered listeners, notified in subscription order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<(ListenerId, Box<dyn GameListener + Send + Sync>)>,
    next_id: u32,
}

impl ListenerRegistry {
    pub(crate) fn subscribe(&mut self, listener: Box<dyn GameListener + Send + Sync>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn emit(&mut self, event: &GameEvent) {
        for (_, listener) in &mut self.listeners {
            listener.on_event(event);
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
