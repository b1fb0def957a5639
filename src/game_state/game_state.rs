//! Position snapshot owned by a board.
//!
//! `GameState` stores one optional piece per square, indexed `0 == a1` through
//! `63 == h8`. Only the FEN piece-placement field is retained.

use crate::errors::{Errors, Result};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Square, BOARD_SQUARES};
use crate::game_state::piece::Piece;
use crate::utils::fen_parser::parse_placement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: [Option<Piece>; BOARD_SQUARES],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; BOARD_SQUARES],
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::parse_fen_string(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Parse a Forsyth-Edwards Notation string into a new state.
    ///
    /// Only the placement field is read. Malformed but present input never
    /// fails; the resulting board is then not guaranteed to be meaningful.
    /// Fails with `InvalidArgument` if `fen` is `None`.
    pub fn parse_fen_string<'a>(fen: impl Into<Option<&'a str>>) -> Result<Self> {
        let fen = fen
            .into()
            .ok_or(Errors::InvalidArgument("fen cannot be null"))?;

        let mut game_state = Self::new_empty();
        // `split` always yields at least one field, possibly empty.
        let placement = fen.split(' ').next().unwrap_or_default();
        parse_placement(placement, &mut game_state.board);
        Ok(game_state)
    }

    /// All 64 square slots, `a1` first.
    #[inline]
    pub fn board(&self) -> &[Option<Piece>; BOARD_SQUARES] {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.get(usize::from(square)).and_then(Option::as_ref)
    }

    pub fn occupied_count(&self) -> usize {
        self.board.iter().flatten().count()
    }
}
