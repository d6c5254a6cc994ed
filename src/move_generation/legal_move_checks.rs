//! The legality filter: self-check screening and the external legality
//! predicate.
//!
//! A pseudo-legal move becomes legal once we know it does not leave the
//! mover's own king attacked. The test is a simulation: apply the move to a
//! scratch copy and ask the check oracle about the resulting position.
//! Castle moves never go through this simulation — `can_castle` has already
//! proven the king safe on every square it touches, so re-simulating would
//! only repeat work.
//!
//! `is_move_legal` is the boundary predicate a command loop calls before
//! accepting an outside move. It never mutates the position: it re-derives
//! the legal set from the origin square (or re-evaluates the castling
//! predicate) and compares.

use crate::apply_move_to_game::game_after_move;
use crate::game_state::game_state::GameState;
use crate::inspect_check::{can_castle, king_in_check};
use crate::move_description::{MoveDescription, MoveKind};
use crate::move_generation::legal_move_generator::legal_moves_from;

/// Would this pseudo-legal move leave the mover's own king attacked?
pub fn leaves_own_king_in_check(game: &GameState, mv: &MoveDescription) -> bool {
    let after = game_after_move(game, mv);
    king_in_check(&after, mv.team).is_some()
}

/// Is this exact externally-proposed move legal in the current position?
///
/// Rejects without mutating: wrong side to move, empty or enemy origin
/// square, and any move the generator would not itself offer.
pub fn is_move_legal(game: &GameState, mv: &MoveDescription) -> bool {
    if mv.team != game.turn {
        return false;
    }
    match mv.kind {
        MoveKind::NoMove => false,
        MoveKind::Castle(side) => can_castle(game, mv.team, side),
        MoveKind::Normal { from, .. } | MoveKind::Promotion { from, .. } => {
            match game.view(&from) {
                Some(piece) if piece.team == mv.team => {
                    legal_moves_from(game, from).contains(mv)
                }
                _ => false,
            }
        }
    }
}
