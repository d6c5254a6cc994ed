//! Static evaluation: material, space, and king-safety terms.
//!
//! Scores are integers from the perspective of the team passed in — higher
//! is better for that team. The shape of the function is the contract
//! (material + mobility + check/checkmate terms); the individual weights
//! are tuning knobs.
//!
//! Material is counted asymmetrically (own pieces weigh more than enemy
//! pieces), which biases the engine toward trades when ahead. Space counts
//! legal destinations per piece, with small bonuses for hitting an enemy
//! piece and for controlling the four center squares. Check and checkmate
//! terms are evaluated for whichever side is currently worse off, so search
//! gravitates toward giving check and away from receiving it.

use crate::game_state::chess_types::{PieceClass, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::inspect_check::{king_in_check, king_in_checkmate};
use crate::move_description::MoveKind;
use crate::move_generation::legal_move_generator::legal_moves_from;

/// Numeric representation of an evaluation score.
pub type Score = i32;

/// Widest useful alpha-beta window; real evaluations stay far inside it.
pub const MIN_SCORE: Score = -999_999;
pub const MAX_SCORE: Score = 999_999;

/// Weight applied to the scoring team's own material.
const OWN_MATERIAL_WEIGHT: Score = 3;
/// Weight applied to the opposing material.
const ENEMY_MATERIAL_WEIGHT: Score = 2;
/// Bonus for a pawn within two ranks of promotion.
const NEAR_PROMOTION_BONUS: Score = 4;
/// Flat penalty/bonus for being in check.
const CHECK_SCORE: Score = 5;
/// Decisive penalty/bonus for being checkmated.
const CHECKMATE_SCORE: Score = 2000;

/// Conventional material value for a piece class.
///
/// The queen is weighted above its textbook value and the king carries a
/// small nominal value; both inherited tuning choices, not contracts.
pub const fn conventional_score(class: PieceClass) -> Score {
    match class {
        PieceClass::Pawn => 1,
        PieceClass::Rook => 5,
        PieceClass::Knight => 3,
        PieceClass::Bishop => 3,
        PieceClass::Queen => 12,
        PieceClass::King => 5,
    }
}

/// Total material for one team, with a push bonus for pawns close to
/// promotion.
pub fn count_material(game: &GameState, team: PieceTeam) -> Score {
    let mut total = 0;
    for location in game.team_locations(team) {
        let piece = match game.view(&location) {
            Some(piece) => piece,
            None => continue,
        };
        total += conventional_score(piece.class);
        if piece.class == PieceClass::Pawn {
            let near = match team {
                PieceTeam::Light => location.1 >= 6,
                PieceTeam::Dark => location.1 <= 1,
            };
            if near {
                total += NEAR_PROMOTION_BONUS;
            }
        }
    }
    total
}

/// Mobility ("space") for one team: one point per legal destination, one
/// more for landing on an enemy piece, one more for touching the center.
/// Zero space for the side to move means the game is over.
pub fn count_space(game: &GameState, team: PieceTeam) -> Score {
    let mut space = 0;
    for location in game.team_locations(team) {
        for mv in legal_moves_from(game, location) {
            space += 1;
            if let MoveKind::Normal { to, .. } = mv.kind {
                if game.is_occupied_by(&to, team.opposite()) {
                    space += 1;
                }
                if (to.0 == 3 || to.0 == 4) && (to.1 == 3 || to.1 == 4) {
                    space += 1;
                }
            }
        }
    }
    space
}

/// Evaluate the position for `team`; higher is better for `team`.
pub fn eval_position(game: &GameState, team: PieceTeam) -> Score {
    let enemy = team.opposite();

    let mut score = count_material(game, team) * OWN_MATERIAL_WEIGHT
        - count_material(game, enemy) * ENEMY_MATERIAL_WEIGHT
        + count_space(game, team)
        - count_space(game, enemy);

    if king_in_check(game, team).is_some() {
        score -= CHECK_SCORE;
        if king_in_checkmate(game, team) {
            score -= CHECKMATE_SCORE;
        }
    } else if king_in_check(game, enemy).is_some() {
        score += CHECK_SCORE;
        if king_in_checkmate(game, enemy) {
            score += CHECKMATE_SCORE;
        }
    }

    score
}
