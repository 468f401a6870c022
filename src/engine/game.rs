//! The game engine: move validation, move execution and turn handling.
//!
//! ## Moves
//!
//! A chameleon of the current player moves along one axis onto a vacant
//! field, either one cell (a slide) or two cells over an opposing
//! chameleon (a jump, which removes the jumped chameleon). Nothing moves
//! once a winner exists.
//!
//! ## Conversion
//!
//! A chameleon that stands on the other faction's home square when its
//! owner's next turn comes around, and is still there after that move,
//! takes the color of the square. Before each move the engine looks for
//! the mover's chameleon on foreign ground (the pending target). If the
//! mover picks up exactly that chameleon and sets it down on a non-neutral
//! square, the target follows it to the destination. After the move, the
//! target converts if it is still occupied.
//!
//! Because conversion happens on the owner's very next move, each color
//! has at most one chameleon on foreign ground in any reachable position.

use std::path::Path;

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, instrument, warn};

use super::event::{FieldChange, FieldChanges, GameEvent, GameListener, ListenerId, ListenerRegistry};
use crate::board::{Board, Field};
use crate::core::{ChameleonError, Color, Coord, Difficulty, GameConfig, PlayerId, Result};
use crate::persistence::{BinaryPersistence, Persistence};

/// Shape of a legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StepKind {
    Slide,
    Jump { over: Coord },
}

/// What a successful `step` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Cells whose occupant changed, in the order they changed.
    pub changes: FieldChanges,
    /// The jumped-over cell, if the move was a jump.
    pub captured: Option<Coord>,
    /// The cell whose chameleon converted to its home color, if any.
    pub converted: Option<Coord>,
    /// The player to move next.
    pub next_player: PlayerId,
    /// The winning color, if the move ended the game.
    pub winner: Option<Color>,
}

/// Owns the current board and enforces the rules.
///
/// ## Example
///
/// ```
/// use chameleon::core::{Color, GameConfig};
/// use chameleon::engine::GameEngine;
///
/// let mut engine = GameEngine::new(GameConfig::new()).unwrap();
/// engine.new_game(5).unwrap();
///
/// // Green slides into the neutral center.
/// let outcome = engine.step((2, 3), (2, 2)).unwrap();
/// assert_eq!(outcome.changes.len(), 2);
/// assert_eq!(engine.current_player(), Color::Red);
///
/// // Green cannot move twice.
/// assert!(engine.step((0, 1), (1, 1)).is_err());
/// ```
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    persistence: Box<dyn Persistence>,
    listeners: ListenerRegistry,
}

impl GameEngine {
    /// Create an engine using the binary save format.
    ///
    /// The engine starts with a freshly seeded board of the configured size.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_persistence(config, BinaryPersistence::new())
    }

    /// Create an engine with a custom persistence backend.
    pub fn with_persistence(config: GameConfig, persistence: impl Persistence + 'static) -> Result<Self> {
        config.validate()?;
        let board = seeded_board(config.board_size)?;

        Ok(Self {
            config,
            board,
            persistence: Box::new(persistence),
            listeners: ListenerRegistry::default(),
        })
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the current board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The color to move.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.board.current_color()
    }

    /// The player to move.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.board.current_player()
    }

    /// The winning color, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    // === Notifications ===

    /// Register a listener for game events.
    ///
    /// Closures must name their argument type: `|event: &GameEvent| ...`.
    pub fn subscribe(&mut self, listener: impl GameListener + Send + Sync + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // === Game lifecycle ===

    /// Start a new game on a `size` x `size` board.
    ///
    /// Every home square receives a chameleon of its own color. Fails with
    /// `InvalidBoard` (leaving the current game untouched) for a bad size.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, size: usize) -> Result<()> {
        self.board = seeded_board(size)?;
        info!(size, "new game");
        self.listeners.emit(&GameEvent::GameLoaded);
        Ok(())
    }

    /// Start a new game using a preset board size.
    pub fn new_game_with_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        self.new_game(difficulty.board_size())
    }

    /// Replace the current game with one read from `reader`.
    ///
    /// The current board is only replaced after the whole stream parsed.
    #[instrument(skip_all)]
    pub async fn load_game(&mut self, reader: &mut (dyn AsyncRead + Unpin + Send)) -> Result<()> {
        let board = self.persistence.load(reader).await?;
        self.install(board);
        Ok(())
    }

    /// Replace the current game with the one saved at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load_game_from_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let board = self.persistence.load_path(path.as_ref()).await?;
        self.install(board);
        Ok(())
    }

    /// Write the current game to `writer`.
    #[instrument(skip_all)]
    pub async fn save_game(&self, writer: &mut (dyn AsyncWrite + Unpin + Send)) -> Result<()> {
        self.persistence.save(writer, &self.board).await
    }

    /// Write the current game to the file at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn save_game_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        self.persistence.save_path(path.as_ref(), &self.board).await
    }

    fn install(&mut self, board: Board) {
        info!(size = board.size(), player = %board.current_player(), "game loaded");
        self.board = board;
        self.listeners.emit(&GameEvent::GameLoaded);
    }

    // === Queries ===

    /// Get the field at `(x, y)`, or `None` if it is off the board.
    #[must_use]
    pub fn get_field(&self, x: i32, y: i32) -> Option<&Field> {
        self.board.field(Coord::new(x, y))
    }

    /// Find the coordinates of a field borrowed from this engine's board.
    pub fn get_field_coordinates(&self, field: &Field) -> Result<Coord> {
        self.board.coordinates_of(field)
    }

    /// Check whether moving from `src` to `dest` is legal right now.
    #[must_use]
    pub fn is_valid_step(&self, src: impl Into<Coord>, dest: impl Into<Coord>) -> bool {
        self.classify(src.into(), dest.into()).is_some()
    }

    /// Legal destinations for the chameleon at `src`.
    #[must_use]
    pub fn valid_destinations(&self, src: impl Into<Coord>) -> Vec<Coord> {
        let src = src.into();
        const OFFSETS: [(i32, i32); 8] = [(0, -1), (1, 0), (0, 1), (-1, 0), (0, -2), (2, 0), (0, 2), (-2, 0)];

        if self.board.field(src).is_none() {
            return Vec::new();
        }

        OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| src.checked_translate(dx, dy))
            .filter(|&dest| self.classify(src, dest).is_some())
            .collect()
    }

    /// Every legal `(src, dest)` pair for the player to move.
    #[must_use]
    pub fn valid_steps(&self) -> Vec<(Coord, Coord)> {
        let mover = self.board.current_color();
        self.board
            .fields()
            .filter(|(_, f)| f.occupant() == mover)
            .flat_map(|(src, _)| {
                self.valid_destinations(src)
                    .into_iter()
                    .map(move |dest| (src, dest))
            })
            .collect()
    }

    fn classify(&self, src: Coord, dest: Coord) -> Option<StepKind> {
        let src_field = self.board.field(src)?;
        let dest_field = self.board.field(dest)?;
        let mover = self.board.current_color();

        if src_field.occupant() != mover || !dest_field.is_vacant() || self.board.winner().is_some() {
            return None;
        }

        let (dx, dy) = (dest.x - src.x, dest.y - src.y);
        let distance = match (dx.abs(), dy.abs()) {
            (0, d) | (d, 0) => d,
            _ => return None,
        };

        match distance {
            1 => Some(StepKind::Slide),
            2 => {
                let over = Coord::new(src.x + dx / 2, src.y + dy / 2);
                let jumped = self.board.field(over)?;
                (jumped.occupant() == mover.opponent()).then_some(StepKind::Jump { over })
            }
            _ => None,
        }
    }

    // === Moves ===

    /// Move the current player's chameleon from `src` to `dest`.
    ///
    /// Fails with `IllegalMove` if the move is not legal; the board is then
    /// unchanged. On success the turn passes to the other player.
    pub fn step(&mut self, src: impl Into<Coord>, dest: impl Into<Coord>) -> Result<StepOutcome> {
        self.execute(src.into(), dest.into())
    }

    #[instrument(skip(self), fields(player = %self.board.current_color()))]
    fn execute(&mut self, src: Coord, dest: Coord) -> Result<StepOutcome> {
        let Some(kind) = self.classify(src, dest) else {
            warn!("illegal step rejected");
            return Err(ChameleonError::IllegalMove { src, dest });
        };

        let mover = self.board.current_color();

        let mut pending = self.board.foreign_occupied(mover).next();
        let dest_home = self.board.field(dest).map_or(Color::Empty, Field::home);
        if pending == Some(src) && dest_home != Color::Empty {
            pending = Some(dest);
        }

        let mut changes = FieldChanges::new();
        self.place(dest, mover, &mut changes)?;
        self.place(src, Color::Empty, &mut changes)?;

        let captured = match kind {
            StepKind::Jump { over } => {
                self.place(over, Color::Empty, &mut changes)?;
                Some(over)
            }
            StepKind::Slide => None,
        };

        let mut converted = None;
        if let Some(target) = pending {
            if let Some(field) = self.board.field(target).filter(|f| !f.is_vacant()) {
                let home = field.home();
                if self.place(target, home, &mut changes)? {
                    debug!(%target, %home, "chameleon converted");
                    converted = Some(target);
                }
            }
        }

        self.board.change_current_player();
        let next_player = self.board.current_player();
        self.listeners
            .emit(&GameEvent::CurrentPlayerChanged { player: next_player });

        self.check_foreign_ground();

        let winner = self.board.winner();
        if let Some(winner) = winner {
            info!(%winner, "game over");
            self.listeners.emit(&GameEvent::GameOver { winner });
        }

        debug!(?captured, ?converted, changed = changes.len(), "step applied");
        Ok(StepOutcome {
            changes,
            captured,
            converted,
            next_player,
            winner,
        })
    }

    /// Set an occupant, recording and announcing it if it changed.
    fn place(&mut self, coord: Coord, color: Color, changes: &mut FieldChanges) -> Result<bool> {
        let changed = self.board.set_occupant(coord, color)?;
        if changed {
            let change = FieldChange::new(coord, color);
            changes.push(change);
            self.listeners.emit(&GameEvent::FieldChanged(change));
        }
        Ok(changed)
    }

    fn check_foreign_ground(&self) {
        for color in [Color::Green, Color::Red] {
            let count = self.board.foreign_occupied(color).count();
            if count > 1 {
                warn!(%color, count, "more than one chameleon on foreign home squares");
            }
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

/// Build a board and put a chameleon of the matching color on every home square.
fn seeded_board(size: usize) -> Result<Board> {
    let mut board = Board::new(size)?;
    let homes: Vec<(Coord, Color)> = board.fields().map(|(c, f)| (c, f.home())).collect();
    for (coord, home) in homes {
        board.set_occupant(coord, home)?;
    }
    Ok(board)
}
