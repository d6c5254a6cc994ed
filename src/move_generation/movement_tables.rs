//! Direction and jump tables for each movement class.
//!
//! Piece movement is pure data: sliders (rook, bishop, queen) walk rays
//! drawn from a direction table until blocked, and jumpers (knight, king)
//! test a fixed offset set. Pawns are the one special case and are handled
//! directly in the generator. Offsets are `(d_file, d_rank)`.

use crate::game_state::chess_types::PieceClass;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_JUMPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Ray directions for sliding pieces, `None` for everything else.
#[inline]
pub fn sliding_directions(class: PieceClass) -> Option<&'static [(i8, i8)]> {
    match class {
        PieceClass::Rook => Some(&ROOK_DIRECTIONS),
        PieceClass::Bishop => Some(&BISHOP_DIRECTIONS),
        PieceClass::Queen => Some(&QUEEN_DIRECTIONS),
        _ => None,
    }
}

/// Fixed offset sets for jumping pieces, `None` for everything else.
#[inline]
pub fn jump_offsets(class: PieceClass) -> Option<&'static [(i8, i8)]> {
    match class {
        PieceClass::Knight => Some(&KNIGHT_JUMPS),
        PieceClass::King => Some(&KING_JUMPS),
        _ => None,
    }
}
