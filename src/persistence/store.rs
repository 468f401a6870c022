//! Async persistence seam.
//!
//! The engine talks to storage only through [`Persistence`], so an
//! application can swap the on-disk format (or a test can hand the engine
//! a prepared board) without touching game logic.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

use super::codec;
use crate::board::Board;
use crate::core::{Result, MAX_BOARD_SIZE};

/// Loads and saves boards.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Read a complete board from `reader`.
    async fn load(&self, reader: &mut (dyn AsyncRead + Unpin + Send)) -> Result<Board>;

    /// Write `board` to `writer`.
    async fn save(&self, writer: &mut (dyn AsyncWrite + Unpin + Send), board: &Board) -> Result<()>;

    /// Read a board from the file at `path`.
    async fn load_path(&self, path: &Path) -> Result<Board> {
        let mut file = File::open(path).await?;
        self.load(&mut file).await
    }

    /// Write a board to the file at `path`, replacing any previous contents.
    async fn save_path(&self, path: &Path, board: &Board) -> Result<()> {
        let mut file = File::create(path).await?;
        self.save(&mut file, board).await
    }
}

/// The binary save format described in [`codec`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryPersistence;

impl BinaryPersistence {
    /// Create the binary store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Persistence for BinaryPersistence {
    #[instrument(skip_all)]
    async fn load(&self, reader: &mut (dyn AsyncRead + Unpin + Send)) -> Result<Board> {
        // One byte past the largest valid file is enough to detect oversize input.
        let limit = codec::encoded_len(MAX_BOARD_SIZE) as u64 + 1;
        let mut bytes = Vec::new();
        reader.take(limit).read_to_end(&mut bytes).await?;

        let board = codec::decode(&bytes)?;
        debug!(size = board.size(), bytes = bytes.len(), "loaded board");
        Ok(board)
    }

    #[instrument(skip_all, fields(size = board.size()))]
    async fn save(&self, writer: &mut (dyn AsyncWrite + Unpin + Send), board: &Board) -> Result<()> {
        let bytes = codec::encode(board);
        writer.write_all(&bytes).await?;
        writer.flush().await?;
        debug!(bytes = bytes.len(), "saved board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChameleonError, Color, Coord};

    #[tokio::test]
    async fn test_save_then_load_stream() {
        let mut board = Board::with_player(5, 1).unwrap();
        board.set_occupant(Coord::new(2, 3), Color::Green).unwrap();
        board.set_occupant(Coord::new(4, 4), Color::Red).unwrap();

        let store = BinaryPersistence::new();
        let mut buffer: Vec<u8> = Vec::new();
        store.save(&mut buffer, &board).await.unwrap();
        assert_eq!(buffer.len(), codec::encoded_len(5));

        let mut reader: &[u8] = &buffer;
        let loaded = store.load(&mut reader).await.unwrap();
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn test_load_truncated_stream() {
        let store = BinaryPersistence::new();
        let mut reader: &[u8] = &[5, 0, 0, 0];
        let err = store.load(&mut reader).await.unwrap_err();
        assert!(matches!(err, ChameleonError::DataCorruption { .. }));
    }

    #[tokio::test]
    async fn test_load_oversized_stream() {
        let store = BinaryPersistence::new();
        let data = vec![2u8; codec::encoded_len(MAX_BOARD_SIZE) + 10];
        let mut reader: &[u8] = &data;
        assert!(store.load(&mut reader).await.is_err());
    }

    #[tokio::test]
    async fn test_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.sav");

        let mut board = Board::new(3).unwrap();
        board.set_occupant(Coord::new(0, 0), Color::Green).unwrap();

        let store = BinaryPersistence::new();
        store.save_path(&path, &board).await.unwrap();
        let loaded = store.load_path(&path).await.unwrap();
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn test_missing_file_is_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let store = BinaryPersistence::new();
        let err = store.load_path(&dir.path().join("missing.sav")).await.unwrap_err();
        assert!(matches!(err, ChameleonError::DataCorruption { .. }));
    }
}
