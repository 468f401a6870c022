//! Binary save format.
//!
//! ```text
//! byte 0                 board size
//! byte 1                 current player (0 = Green, 1 = Red)
//! bytes 2 .. 2 + size^2  occupant of (i, j) at 2 + i * size + j
//!                        (0 = Green, 1 = Red, 2 = Empty)
//! ```
//!
//! Home colors are not stored; decoding rebuilds them from the size.

use tracing::warn;

use crate::board::Board;
use crate::core::{ChameleonError, Color, Coord, Result};

/// Length of the size + player header.
pub const HEADER_LEN: usize = 2;

/// Total encoded length for a board of `size`.
#[must_use]
pub const fn encoded_len(size: usize) -> usize {
    HEADER_LEN + size * size
}

/// Encode a board.
///
/// Boards are at most 255 wide, so the size always fits its header byte.
#[must_use]
pub fn encode(board: &Board) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(encoded_len(board.size()));
    bytes.push(board.size() as u8);
    bytes.push(board.current_player().index());
    bytes.extend(board.fields().map(|(_, f)| f.occupant().ordinal()));
    bytes
}

/// Decode a board, requiring exactly `2 + size^2` bytes.
///
/// Any problem (missing header, bad size or player, wrong length,
/// unknown color byte) is reported as `DataCorruption`.
pub fn decode(bytes: &[u8]) -> Result<Board> {
    let (size, player) = match bytes {
        [size, player, ..] => (*size as usize, *player),
        _ => return Err(corrupt(format!("header needs {} bytes, got {}", HEADER_LEN, bytes.len()))),
    };

    let mut board = Board::with_player(size, player).map_err(|err| corrupt(err.to_string()))?;

    let expected = encoded_len(size);
    if bytes.len() != expected {
        return Err(corrupt(format!(
            "expected {} bytes for a {}x{} board, got {}",
            expected,
            size,
            size,
            bytes.len()
        )));
    }

    for (i, &byte) in bytes[HEADER_LEN..].iter().enumerate() {
        let color = Color::from_ordinal(byte)
            .ok_or_else(|| corrupt(format!("invalid color byte {} at offset {}", byte, i + HEADER_LEN)))?;
        let coord = Coord::new((i / size) as i32, (i % size) as i32);
        board.set_occupant(coord, color)?;
    }

    Ok(board)
}

fn corrupt(reason: String) -> ChameleonError {
    warn!(%reason, "rejecting save data");
    ChameleonError::corruption(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn sample_board() -> Board {
        let mut board = Board::with_player(3, 1).unwrap();
        board.set_occupant(Coord::new(0, 0), Color::Green).unwrap();
        board.set_occupant(Coord::new(1, 2), Color::Red).unwrap();
        board.set_occupant(Coord::new(2, 1), Color::Green).unwrap();
        board
    }

    #[test]
    fn test_encode_layout() {
        let bytes = encode(&sample_board());
        assert_eq!(bytes, vec![3, 1, 0, 2, 2, 2, 2, 1, 2, 0, 2]);
    }

    #[test]
    fn test_decode_restores_board() {
        let board = sample_board();
        let decoded = decode(&encode(&board)).unwrap();

        assert_eq!(decoded, board);
        assert_eq!(decoded.current_player(), PlayerId::RED);
        assert_eq!(decoded.field(Coord::new(1, 1)).unwrap().home(), Color::Empty);
    }

    #[test]
    fn test_decode_rejects_short_header() {
        assert!(matches!(decode(&[]), Err(ChameleonError::DataCorruption { .. })));
        assert!(matches!(decode(&[3]), Err(ChameleonError::DataCorruption { .. })));
    }

    #[test]
    fn test_decode_rejects_bad_header() {
        let mut bytes = encode(&sample_board());
        bytes[0] = 4;
        assert!(matches!(decode(&bytes), Err(ChameleonError::DataCorruption { .. })));

        let mut bytes = encode(&sample_board());
        bytes[1] = 2;
        assert!(matches!(decode(&bytes), Err(ChameleonError::DataCorruption { .. })));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let bytes = encode(&sample_board());
        assert!(decode(&bytes[..bytes.len() - 1]).is_err());

        let mut long = bytes.clone();
        long.push(2);
        assert!(decode(&long).is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_color() {
        let mut bytes = encode(&sample_board());
        bytes[5] = 3;
        let err = decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("invalid color byte 3 at offset 5"));
    }
}
