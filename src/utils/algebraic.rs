//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices where `0 == a1` and `63 == h8`.

use crate::errors::{Errors, Result};
use crate::game_state::chess_types::{Square, BOARD_SQUARES};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidArgument("algebraic square must be a file and a rank"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(Errors::InvalidArgument("algebraic file must be in a..h"));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(Errors::InvalidArgument("algebraic rank must be in 1..8"));
    }

    let file_index = file - b'a';
    let rank_index = rank - b'1';
    Ok(rank_index * 8 + file_index)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String> {
    if usize::from(square) >= BOARD_SQUARES {
        return Err(Errors::OutOfBounds(isize::from(square)));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);

    Ok(format!("{file_char}{rank_char}"))
}
