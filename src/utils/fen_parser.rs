//! FEN piece-placement parser.
//!
//! Walks the placement field once with a write cursor that starts on `a8`
//! (square 56) and moves down one rank at each `/`. The parser is lenient:
//! malformed input produces a best-effort board, never an error.

use log::{debug, warn};

use crate::game_state::chess_types::{BOARD_FILES, BOARD_SQUARES};
use crate::game_state::piece::Piece;

/// Square index of `a8`, where FEN placement text begins.
const PLACEMENT_START: isize = ((BOARD_FILES - 1) * BOARD_FILES) as isize;

/// Net cursor step at a rank separator: back over the rank just written and
/// one more rank down.
const RANK_SEPARATOR_STEP: isize = 2 * BOARD_FILES as isize;

/// Populate `board` from a FEN placement field such as
/// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
///
/// Digits clear that many squares. Unrecognized characters are skipped and
/// squares addressed outside the board are dropped.
pub fn parse_placement(placement: &str, board: &mut [Option<Piece>; BOARD_SQUARES]) {
    let mut index = PLACEMENT_START;

    for ch in placement.chars() {
        if ch == '/' {
            index -= RANK_SEPARATOR_STEP;
            continue;
        }

        // ASCII only; other Unicode decimal digits fall through as unrecognized.
        if let Some(empty_count) = ch.to_digit(10) {
            for _ in 0..empty_count {
                write_square(board, index, None);
                index += 1;
            }
            continue;
        }

        match Piece::from_fen_char(ch) {
            Some(piece) => {
                write_square(board, index, Some(piece));
                index += 1;
            }
            None => warn!("skipping unrecognized FEN placement character '{ch}'"),
        }
    }

    debug!(
        "parsed FEN placement '{placement}' into {} occupied squares",
        board.iter().flatten().count()
    );
}

fn write_square(board: &mut [Option<Piece>; BOARD_SQUARES], index: isize, value: Option<Piece>) {
    match usize::try_from(index).ok().and_then(|i| board.get_mut(i)) {
        Some(slot) => *slot = value,
        None => warn!("FEN placement addresses square {index} outside the board; ignored"),
    }
}
