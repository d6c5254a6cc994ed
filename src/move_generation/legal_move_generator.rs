//! Legal move enumeration for squares and whole sides.
//!
//! `legal_moves_from` screens one square's pseudo-legal moves through the
//! self-check filter, then appends castling for a king whose wing passes
//! the castling predicate. `all_legal_moves` strings the squares of one
//! side together lazily, so callers that stop early — the first-legal-move
//! probe behind checkmate and stalemate detection, or an alpha-beta cutoff
//! — never touch the remainder of the board.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{CastleSide, PieceClass, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::inspect_check::can_castle;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_checks::leaves_own_king_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves_from;

/// The ordered legal moves of the piece on `from`, castling included.
/// An empty square yields an empty vector.
pub fn legal_moves_from(game: &GameState, from: BoardLocation) -> Vec<MoveDescription> {
    let piece = match game.view(&from) {
        Some(piece) => *piece,
        None => return Vec::new(),
    };

    let mut moves = pseudo_legal_moves_from(game, from);
    moves.retain(|mv| !leaves_own_king_in_check(game, mv));

    // Castling was vetted square-by-square by `can_castle`; it does not go
    // through the self-check simulation again.
    if piece.class == PieceClass::King {
        for side in [CastleSide::Queenside, CastleSide::Kingside] {
            if can_castle(game, piece.team, side) {
                moves.push(MoveDescription::castle(piece.team, side));
            }
        }
    }

    moves
}

/// Every legal move available to `team`, square by square in rank order.
/// The sequence is lazy across squares and restartable (call it again for a
/// fresh pass); consuming it partially is the expected use.
pub fn all_legal_moves(
    game: &GameState,
    team: PieceTeam,
) -> impl Iterator<Item = MoveDescription> + '_ {
    game.team_locations(team)
        .flat_map(move |location| legal_moves_from(game, location))
}

/// Does `team` have any legal move at all? Stops at the first one found.
pub fn exists_legal_move(game: &GameState, team: PieceTeam) -> bool {
    all_legal_moves(game, team).next().is_some()
}
