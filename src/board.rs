//! Public board handle.
//!
//! A `Board` owns one `GameState`, built from a FEN string or the standard
//! starting position, and answers read-only square queries.

use std::fmt;

use crate::errors::{Errors, Result};
use crate::game_state::chess_types::{Square, BOARD_SQUARES};
use crate::game_state::game_state::GameState;
use crate::game_state::piece::Piece;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    state: GameState,
}

impl Board {
    /// Board set up in the standard starting position.
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
        }
    }

    /// Board set up from a FEN string. Fails with `InvalidArgument` if `fen` is `None`.
    pub fn from_fen<'a>(fen: impl Into<Option<&'a str>>) -> Result<Self> {
        let fen = fen
            .into()
            .ok_or(Errors::InvalidArgument("fen cannot be null"))?;
        Ok(Self {
            state: GameState::parse_fen_string(fen)?,
        })
    }

    /// Piece on square `index` (`0 == a1`, `63 == h8`), if any.
    ///
    /// Fails with `OutOfBounds` unless `0 <= index < 64`.
    pub fn piece_at(&self, index: isize) -> Result<Option<&Piece>> {
        let square = usize::try_from(index)
            .ok()
            .filter(|&i| i < BOARD_SQUARES)
            .ok_or(Errors::OutOfBounds(index))?;
        Ok(self.state.board()[square].as_ref())
    }

    /// Piece on an algebraic coordinate such as `"e1"`.
    pub fn piece_on(&self, square: &str) -> Result<Option<&Piece>> {
        let square = algebraic_to_square(square)?;
        Ok(self.state.piece_at(square))
    }

    /// Occupied squares in index order with their pieces.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        (0..)
            .zip(self.state.board().iter())
            .filter_map(|(square, slot)| slot.as_ref().map(|piece| (square, piece)))
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(&self.state))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::errors::Errors;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece::Piece;

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::new(kind, color).expect("piece should construct")
    }

    #[test]
    fn on_board_creation_a1_is_white_rook() {
        let board = Board::new();
        let a1 = board.piece_at(0).expect("index 0 should be on the board");
        assert_eq!(a1, Some(&piece(PieceKind::Rook, Color::White)));
    }

    #[test]
    fn starting_position_landmarks() {
        let board = Board::default();
        let at = |index| board.piece_at(index).expect("index should be on the board").copied();

        assert_eq!(at(7), Some(piece(PieceKind::Rook, Color::White)));
        assert_eq!(at(56), Some(piece(PieceKind::Rook, Color::Black)));
        assert_eq!(at(60), Some(piece(PieceKind::King, Color::Black)));
        assert_eq!(at(63), Some(piece(PieceKind::Rook, Color::Black)));
        assert_eq!(at(27), None);

        let occupied: Vec<_> = board.occupied_squares().collect();
        assert_eq!(occupied.len(), 32);
        let white = occupied.iter().filter(|(_, p)| p.color() == Color::White).count();
        assert_eq!(white, 16);
        assert_eq!(occupied.len() - white, 16);
    }

    #[test]
    fn index_bounds() {
        let board = Board::new();
        assert_eq!(board.piece_at(-1), Err(Errors::OutOfBounds(-1)));
        assert_eq!(board.piece_at(64), Err(Errors::OutOfBounds(64)));
        assert!(board.piece_at(0).is_ok());
        assert!(board.piece_at(63).is_ok());
    }

    #[test]
    fn absent_fen_is_rejected() {
        assert_eq!(Board::from_fen(None), Err(Errors::InvalidArgument("fen cannot be null")));
    }

    #[test]
    fn explicit_starting_fen_matches_default() {
        let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("starting FEN should parse");
        assert_eq!(board, Board::new());
    }

    #[test]
    fn piece_at_agrees_with_parsed_state() {
        let board = Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
            .expect("FEN should parse");

        for index in 0..64 {
            let slot = board.state().board()[index as usize].as_ref();
            assert_eq!(board.piece_at(index).expect("index should be on the board"), slot);
        }

        assert_eq!(
            board.piece_on("h5").expect("h5 should parse"),
            Some(&piece(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            board.piece_on("f6").expect("f6 should parse"),
            Some(&piece(PieceKind::Knight, Color::Black))
        );
        assert_eq!(board.piece_on("e2").expect("e2 should parse"), None);
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8").expect("empty placement should parse");
        assert_eq!(board.occupied_squares().count(), 0);
        assert!(board.to_string().starts_with("  a b c d e f g h\n8 · · ·"));
    }
}
