//! Perft: exhaustive leaf-node counting to validate move generation.
//!
//! `count_leaf_nodes` recursively counts the positions reachable at exactly
//! the given depth, with no evaluation involved. The counts are compared
//! against the published reference tables; any divergence pinpoints a rules
//! bug (castling, en passant, promotion, or self-check filtering).

use crate::apply_move_to_game::game_after_move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Number of leaf positions reachable from `game` in exactly `depth` plies.
pub fn count_leaf_nodes(game: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in all_legal_moves(game, game.turn) {
        let next = game_after_move(game, &mv);
        nodes += count_leaf_nodes(&next, depth - 1);
    }
    nodes
}

// Reference counts are taken from:
// https://www.chessprogramming.org/Perft_Results
