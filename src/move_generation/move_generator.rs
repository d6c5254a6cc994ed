//! Pseudo-legal move generation for a single occupied square.
//!
//! "Pseudo-legal" means the move obeys piece movement and occupancy rules
//! but has not yet been screened for leaving the mover's own king in check;
//! that screening is the legality filter's job. Castling is likewise not
//! produced here — the legal-move generator appends it after consulting the
//! castling predicate, since castling legality is a property of the whole
//! position rather than of one piece's geometry.
//!
//! Generation is ordered and deterministic: pawns emit double step, then
//! captures (a-side first), then the single step; sliders walk their
//! direction tables in table order; jumpers walk their offset tables in
//! table order. Every consumer that cares about reproducibility (search,
//! perft, tests) inherits this order.
//!
//! The `_into` variant exists so hot scanning loops (check detection,
//! threat testing) can reuse one scratch buffer instead of allocating a
//! fresh vector per piece.

use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::chess_rules::PROMOTION_CLASSES;
use crate::game_state::chess_types::{PieceClass, PieceRecord, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::movement_tables::{jump_offsets, sliding_directions};

/// Append the pseudo-legal moves of the piece on `from` to `out`.
///
/// An empty square contributes nothing. The buffer is not cleared first.
pub fn generate_pseudo_legal_into(
    game: &GameState,
    from: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    let piece = match game.view(&from) {
        Some(piece) => *piece,
        None => return,
    };

    match piece.class {
        PieceClass::Pawn => generate_pawn_moves(game, from, piece, out),
        PieceClass::Rook | PieceClass::Bishop | PieceClass::Queen => {
            generate_sliding_moves(game, from, piece, out)
        }
        PieceClass::Knight | PieceClass::King => generate_jumping_moves(game, from, piece, out),
    }
}

/// The ordered pseudo-legal moves of the piece on `from`.
pub fn pseudo_legal_moves_from(game: &GameState, from: BoardLocation) -> Vec<MoveDescription> {
    let mut out = Vec::new();
    generate_pseudo_legal_into(game, from, &mut out);
    out
}

/// Push a pawn arrival, fanning out into the four promotion choices when
/// the destination is the far rank.
fn push_pawn_arrival(
    team: PieceTeam,
    from: BoardLocation,
    to: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    if to.1 == 0 || to.1 == 7 {
        for class in PROMOTION_CLASSES {
            out.push(MoveDescription::promotion(team, from, to, class));
        }
    } else {
        out.push(MoveDescription::normal(team, from, to));
    }
}

fn generate_pawn_moves(
    game: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    let team = piece.team;
    let enemy = team.opposite();
    let dir = team.forward_direction();

    // Two squares from the starting rank, both intervening squares free.
    if from.1 == team.pawn_rank() {
        if let (Ok(one), Ok(two)) = (
            move_board_location(&from, 0, dir),
            move_board_location(&from, 0, 2 * dir),
        ) {
            if !game.is_occupied(&one) && !game.is_occupied(&two) {
                out.push(MoveDescription::normal(team, from, two));
            }
        }
    }

    // Diagonal captures, plus en passant onto the empty square behind an
    // enemy pawn that just double-stepped past us.
    for d_file in [-1, 1] {
        if let Ok(to) = move_board_location(&from, d_file, dir) {
            if game.is_occupied_by(&to, enemy) {
                push_pawn_arrival(team, from, to, out);
            } else if !game.is_occupied(&to)
                && from.1 == team.en_passant_rank()
                && game.en_passant[enemy.index()][to.0 as usize]
                && matches!(
                    game.view(&(to.0, from.1)),
                    Some(beside) if beside.team == enemy && beside.class == PieceClass::Pawn
                )
            {
                out.push(MoveDescription::normal(team, from, to));
            }
        }
    }

    // Single step forward.
    if let Ok(to) = move_board_location(&from, 0, dir) {
        if !game.is_occupied(&to) {
            push_pawn_arrival(team, from, to, out);
        }
    }
}

fn generate_sliding_moves(
    game: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    let directions = match sliding_directions(piece.class) {
        Some(directions) => directions,
        None => return,
    };
    for (d_file, d_rank) in directions {
        for distance in 1..8 {
            let to = match move_board_location(&from, d_file * distance, d_rank * distance) {
                Ok(to) => to,
                Err(_) => break,
            };
            match game.view(&to) {
                None => out.push(MoveDescription::normal(piece.team, from, to)),
                Some(blocker) => {
                    if blocker.team != piece.team {
                        out.push(MoveDescription::normal(piece.team, from, to));
                    }
                    break;
                }
            }
        }
    }
}

fn generate_jumping_moves(
    game: &GameState,
    from: BoardLocation,
    piece: PieceRecord,
    out: &mut Vec<MoveDescription>,
) {
    let offsets = match jump_offsets(piece.class) {
        Some(offsets) => offsets,
        None => return,
    };
    for (d_file, d_rank) in offsets {
        if let Ok(to) = move_board_location(&from, *d_file, *d_rank) {
            if !game.is_occupied_by(&to, piece.team) {
                out.push(MoveDescription::normal(piece.team, from, to));
            }
        }
    }
}
