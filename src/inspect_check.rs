//! Check inspection: is a king attacked, is a square attacked, may a side
//! castle, and is the game over.
//!
//! The oracle works directly off pseudo-legal generation: a side gives
//! check exactly when one of its pseudo-legal destinations is the enemy
//! king's square. Self-check filtering is deliberately ignored here — a
//! pinned piece still delivers check, because capturing the king would end
//! the game before the pin could matter.
//!
//! `can_castle` is the composite eligibility predicate. It enforces every
//! castling condition at once: intact king/rook bookkeeping, the rook still
//! standing, an empty corridor, and no enemy attack on the king's current,
//! transit, or destination squares. Because it owns the through-check
//! conditions, castle moves it approves skip the generic self-check
//! simulation in the legality filter.

use crate::board_location::BoardLocation;
use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::chess_types::{CastleSide, PieceClass, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::move_description::MoveKind;
use crate::move_generation::legal_move_generator::exists_legal_move;
use crate::move_generation::move_generator::generate_pseudo_legal_into;

/// The destination square of a move, for attack purposes. Castling never
/// captures, so it contributes none.
#[inline]
fn attacked_square(kind: &MoveKind) -> Option<BoardLocation> {
    match kind {
        MoveKind::Normal { to, .. } => Some(*to),
        MoveKind::Promotion { to, .. } => Some(*to),
        MoveKind::Castle(_) | MoveKind::NoMove => None,
    }
}

/// Is the given team's king attacked? Returns the king's square when it is,
/// mirroring callers that want to highlight or reason about the checked
/// king, and `None` when the king is safe (or absent, best effort).
pub fn king_in_check(game: &GameState, team: PieceTeam) -> Option<BoardLocation> {
    let enemy = team.opposite();
    let mut scratch = Vec::new();
    for location in game.team_locations(enemy) {
        scratch.clear();
        generate_pseudo_legal_into(game, location, &mut scratch);
        for mv in &scratch {
            if let Some(to) = attacked_square(&mv.kind) {
                if matches!(
                    game.view(&to),
                    Some(piece) if piece.class == PieceClass::King && piece.team == team
                ) {
                    return Some(to);
                }
            }
        }
    }
    None
}

/// Does the enemy of `friendly` have a pseudo-legal move landing on
/// `target`? Used to keep the king out of attacked squares when castling.
///
/// Note: pawn captures are only generated onto occupied squares, so a
/// pawn's diagonal coverage of an *empty* square is invisible here. The
/// castling guard inherits that approximation.
pub fn square_threatened(game: &GameState, target: BoardLocation, friendly: PieceTeam) -> bool {
    let enemy = friendly.opposite();
    let mut scratch = Vec::new();
    for location in game.team_locations(enemy) {
        scratch.clear();
        generate_pseudo_legal_into(game, location, &mut scratch);
        if scratch
            .iter()
            .any(|mv| attacked_square(&mv.kind) == Some(target))
        {
            return true;
        }
    }
    false
}

/// Full castling eligibility for one wing. Every condition must hold:
/// neither the king nor that wing's rook has ever moved, the rook is still
/// on its home square, the corridor between them is empty, the king is not
/// currently in check, and neither the square the king crosses nor the one
/// it lands on is attacked.
pub fn can_castle(game: &GameState, team: PieceTeam, side: CastleSide) -> bool {
    if !game.castling_rights_intact(team, side) {
        return false;
    }

    let rank = team.home_rank();
    if !matches!(
        game.view(&(KING_START_FILE, rank)),
        Some(piece) if piece.class == PieceClass::King && piece.team == team
    ) {
        return false;
    }
    if !matches!(
        game.view(&(side.rook_file(), rank)),
        Some(piece) if piece.class == PieceClass::Rook && piece.team == team
    ) {
        return false;
    }

    let corridor: &[i8] = match side {
        CastleSide::Queenside => &[1, 2, 3],
        CastleSide::Kingside => &[5, 6],
    };
    if corridor.iter().any(|file| game.is_occupied(&(*file, rank))) {
        return false;
    }

    // Origin, transit, and destination squares of the king, in that order.
    let guarded: &[i8] = match side {
        CastleSide::Queenside => &[4, 3, 2],
        CastleSide::Kingside => &[4, 5, 6],
    };
    !guarded
        .iter()
        .any(|file| square_threatened(game, (*file, rank), team))
}

/// Checkmate: in check with no legal move. Meaningful for the side to move.
pub fn king_in_checkmate(game: &GameState, team: PieceTeam) -> bool {
    king_in_check(game, team).is_some() && !exists_legal_move(game, team)
}

/// Stalemate: no legal move but not in check. Never true together with
/// [`king_in_checkmate`] for the same position.
pub fn king_in_stalemate(game: &GameState, team: PieceTeam) -> bool {
    king_in_check(game, team).is_none() && !exists_legal_move(game, team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_open_file_gives_check() {
        let game = GameState::from_fen("7k/8/8/8/8/8/8/K6r w - - 0 1").unwrap();
        assert_eq!(king_in_check(&game, PieceTeam::Light), Some((0, 0)));
        assert_eq!(king_in_check(&game, PieceTeam::Dark), None);
    }

    #[test]
    fn pawn_checks_diagonally_not_forward() {
        // Dark pawn on e3: attacks d2 and f2, not e2.
        let diagonal = GameState::from_fen("7k/8/8/8/8/4p3/3K4/8 w - - 0 1").unwrap();
        assert!(king_in_check(&diagonal, PieceTeam::Light).is_some());

        let ahead = GameState::from_fen("7k/8/8/8/8/4p3/4K3/8 w - - 0 1").unwrap();
        assert!(king_in_check(&ahead, PieceTeam::Light).is_none());
    }

    #[test]
    fn square_threatened_sees_knight_forks() {
        let game = GameState::from_fen("7k/8/8/8/4n3/8/8/K7 w - - 0 1").unwrap();
        assert!(square_threatened(&game, (3, 1), PieceTeam::Light));
        assert!(square_threatened(&game, (5, 1), PieceTeam::Light));
        assert!(!square_threatened(&game, (4, 1), PieceTeam::Light));
    }

    #[test]
    fn castling_requires_untouched_king_and_rook() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(can_castle(&game, PieceTeam::Light, CastleSide::Kingside));
        assert!(can_castle(&game, PieceTeam::Light, CastleSide::Queenside));

        game.rook_moved[PieceTeam::Light.index()][CastleSide::Kingside.index()] = true;
        assert!(!can_castle(&game, PieceTeam::Light, CastleSide::Kingside));
        assert!(can_castle(&game, PieceTeam::Light, CastleSide::Queenside));

        game.king_moved[PieceTeam::Light.index()] = true;
        assert!(!can_castle(&game, PieceTeam::Light, CastleSide::Queenside));
    }

    #[test]
    fn castling_requires_an_empty_corridor() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").unwrap();
        assert!(!can_castle(&game, PieceTeam::Light, CastleSide::Kingside));
        assert!(!can_castle(&game, PieceTeam::Light, CastleSide::Queenside));
        assert!(can_castle(&game, PieceTeam::Dark, CastleSide::Kingside));
    }

    #[test]
    fn castling_through_or_into_an_attacked_square_is_barred() {
        // Dark rook on f8 covers f1, the kingside transit square.
        let through = GameState::from_fen("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(!can_castle(&through, PieceTeam::Light, CastleSide::Kingside));
        // Queenside transit (d1) is clear of that rook.
        assert!(can_castle(&through, PieceTeam::Light, CastleSide::Queenside));

        // Dark rook on g8 covers only the destination square g1.
        let into = GameState::from_fen("6rk/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(!can_castle(&into, PieceTeam::Light, CastleSide::Kingside));
    }

    #[test]
    fn castling_out_of_check_is_barred() {
        let game = GameState::from_fen("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert!(!can_castle(&game, PieceTeam::Light, CastleSide::Kingside));
        assert!(!can_castle(&game, PieceTeam::Light, CastleSide::Queenside));
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        // b1 is neither transit nor destination for the king; only the rook
        // crosses it. A rook eyeing b1 must not bar queenside castling.
        let game = GameState::from_fen("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        assert!(can_castle(&game, PieceTeam::Light, CastleSide::Queenside));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let game = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        assert!(king_in_check(&game, PieceTeam::Light).is_some());
        assert!(king_in_checkmate(&game, PieceTeam::Light));
        assert!(!king_in_stalemate(&game, PieceTeam::Light));
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate_not_checkmate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(king_in_check(&game, PieceTeam::Dark).is_none());
        assert!(king_in_stalemate(&game, PieceTeam::Dark));
        assert!(!king_in_checkmate(&game, PieceTeam::Dark));
    }
}
