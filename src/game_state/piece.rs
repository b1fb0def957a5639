//! A single chess piece: a fixed color and a kind that only changes through
//! pawn promotion.

use crate::errors::{Errors, Result};
use crate::game_state::chess_types::{Color, PieceKind};

/// A chess piece. Equality and hashing are structural over kind and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Create a piece from its kind and color.
    ///
    /// Fails with `InvalidArgument` if either value is `None`.
    pub fn new(kind: impl Into<Option<PieceKind>>, color: impl Into<Option<Color>>) -> Result<Self> {
        let kind = kind
            .into()
            .ok_or(Errors::InvalidArgument("type cannot be null"))?;
        let color = color
            .into()
            .ok_or(Errors::InvalidArgument("color cannot be null"))?;
        Ok(Self { kind, color })
    }

    /// Piece for a FEN placement letter: uppercase is white, lowercase is black.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(ch)?;
        let color = if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            Color::White
        };
        Some(Self { kind, color })
    }

    /// Promote this piece in place.
    ///
    /// Returns `Ok(false)` without touching the piece when it is not a pawn.
    /// Fails with `InvalidArgument` when `promotion` is `None`, a pawn or a king,
    /// whatever the current kind.
    pub fn promote(&mut self, promotion: impl Into<Option<PieceKind>>) -> Result<bool> {
        let promotion = promotion
            .into()
            .ok_or(Errors::InvalidArgument("promotionType cannot be null"))?;
        if !promotion.is_promotion_target() {
            return Err(Errors::InvalidArgument("promotionType cannot be pawn or king"));
        }
        if self.kind != PieceKind::Pawn {
            return Ok(false);
        }
        self.kind = promotion;
        Ok(true)
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// FEN letter for this piece, uppercase for white.
    #[inline]
    pub fn to_fen_char(&self) -> char {
        match self.color {
            Color::White => self.kind.fen_char().to_ascii_uppercase(),
            Color::Black => self.kind.fen_char(),
        }
    }
}
