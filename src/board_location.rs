//! Board coordinates and bounds-checked coordinate arithmetic.
//!
//! A `BoardLocation` is a `(file, rank)` pair, both zero-based, so `(0, 0)`
//! is a1 and `(7, 7)` is h8. Using plain `i8` tuples keeps coordinate math
//! (direction vectors, knight jumps) free of conversions; the board itself
//! rejects anything outside `0..=7`.

use crate::chess_errors::ChessErrors;

/// `(file, rank)` with both components in `0..=7` for on-board squares.
pub type BoardLocation = (i8, i8);

/// Returns true when both coordinates lie on the board.
#[inline]
pub fn is_on_board(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Moves a board location by a specified file and rank offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_file` - The file offset.
/// * `d_rank` - The rank offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - Returns the new board location
///   if within bounds, otherwise returns an error.
pub fn move_board_location(
    x: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if is_on_board(&y) {
        Ok(y)
    } else {
        Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_file, d_rank)))
    }
}
