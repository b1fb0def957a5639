//! Crate root module declarations for the chesslib board library.
//!
//! Exposes the piece/board data model, the lenient FEN placement parser, and
//! the small coordinate and rendering helpers built around them.

pub mod board;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use board::Board;
pub use errors::{Errors, Result};
pub use game_state::chess_types::{Color, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use game_state::piece::Piece;
