//! Closed value types shared by the board model.
//!
//! Color and piece kind are plain enums so that invalid values cannot be
//! constructed; square indices are bare integers in `0..=63`.

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

/// Number of files (and ranks) on the board.
pub const BOARD_FILES: usize = 8;

/// Board square index (`0 == a1`, `7 == h1`, `63 == h8`).
pub type Square = u8;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Conventional material value in pawns. The king has none.
    #[inline]
    pub const fn material_value(self) -> Option<u8> {
        match self {
            PieceKind::Pawn => Some(1),
            PieceKind::Knight | PieceKind::Bishop => Some(3),
            PieceKind::Rook => Some(5),
            PieceKind::Queen => Some(9),
            PieceKind::King => None,
        }
    }

    /// Kinds a pawn may be promoted to.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }

    /// Look up a kind by its FEN letter, ignoring case.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}
