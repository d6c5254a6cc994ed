//! The move executor: the one place that mutates a position.
//!
//! `apply_move` trusts its caller. Moves reaching it have either come out of
//! the legal-move generator or been validated by the legality predicate, so
//! it performs no rule re-checks of its own — it just carries out the board
//! and flag updates and flips the side to move. Feeding it an unvalidated
//! move corrupts the position.

use crate::board_location::BoardLocation;
use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::chess_types::{CastleSide, PieceClass, PieceRecord, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::move_description::{MoveDescription, MoveKind};

/// Apply one move to the position in place, then flip the side to move.
///
/// En-passant flags of the moving side are cleared first: they are valid
/// for exactly one enemy reply, and the owner moving again is what expires
/// them. The `NoMove` sentinel is a complete no-op — it does not flip the
/// turn either.
pub fn apply_move(game: &mut GameState, mv: &MoveDescription) {
    let team = mv.team;

    match mv.kind {
        MoveKind::NoMove => return,
        MoveKind::Normal { from, to } => {
            game.en_passant[team.index()] = [false; 8];
            execute_normal(game, team, from, to);
        }
        MoveKind::Promotion { from, to, class } => {
            game.en_passant[team.index()] = [false; 8];
            game.clear(from);
            game.place(to, PieceRecord { class, team });
        }
        MoveKind::Castle(side) => {
            game.en_passant[team.index()] = [false; 8];
            execute_castle(game, team, side);
        }
    }

    game.turn = game.turn.opposite();
}

/// Convenience wrapper used by the search: apply a move to a fresh copy.
pub fn game_after_move(game: &GameState, mv: &MoveDescription) -> GameState {
    let mut next = game.clone();
    apply_move(&mut next, mv);
    next
}

fn execute_normal(game: &mut GameState, team: PieceTeam, from: BoardLocation, to: BoardLocation) {
    if let Some(piece) = game.view(&from).copied() {
        if piece.class == PieceClass::Pawn {
            // A two-rank advance becomes capturable en passant for one ply.
            if (to.1 - from.1).abs() == 2 {
                game.en_passant[team.index()][to.0 as usize] = true;
            }
            // A diagonal arrival on an empty square is an en-passant
            // capture; the victim stands beside the origin, not on `to`.
            if from.0 != to.0 && !game.is_occupied(&to) {
                game.clear((to.0, from.1));
            }
        }
        if piece.class == PieceClass::King {
            game.king_moved[team.index()] = true;
        }
        if piece.class == PieceClass::Rook && (from.0 == 0 || from.0 == 7) {
            let side = if from.0 == 0 {
                CastleSide::Queenside
            } else {
                CastleSide::Kingside
            };
            game.rook_moved[team.index()][side.index()] = true;
        }
    }

    let moved = game.clear(from);
    game.board[to.1 as usize][to.0 as usize] = moved;
}

fn execute_castle(game: &mut GameState, team: PieceTeam, side: CastleSide) {
    let rank = team.home_rank();
    let king_to = KING_START_FILE + side.king_travel();
    // The rook lands on the square the king passed through.
    let rook_to = KING_START_FILE + side.king_travel() / 2;

    game.clear((KING_START_FILE, rank));
    game.place(
        (king_to, rank),
        PieceRecord {
            class: PieceClass::King,
            team,
        },
    );
    game.clear((side.rook_file(), rank));
    game.place(
        (rook_to, rank),
        PieceRecord {
            class: PieceClass::Rook,
            team,
        },
    );

    game.king_moved[team.index()] = true;
    game.rook_moved[team.index()][side.index()] = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_pawn() -> PieceRecord {
        PieceRecord {
            class: PieceClass::Pawn,
            team: PieceTeam::Light,
        }
    }

    #[test]
    fn open_game_scenario_e4_e5() {
        let mut game = GameState::new_game();
        apply_move(
            &mut game,
            &MoveDescription::normal(PieceTeam::Light, (4, 1), (4, 3)),
        );
        assert_eq!(game.turn, PieceTeam::Dark);
        apply_move(
            &mut game,
            &MoveDescription::normal(PieceTeam::Dark, (4, 6), (4, 4)),
        );

        assert_eq!(game.view(&(4, 3)), Some(&light_pawn()));
        assert_eq!(
            game.view(&(4, 4)),
            Some(&PieceRecord {
                class: PieceClass::Pawn,
                team: PieceTeam::Dark
            })
        );
        assert!(game.view(&(4, 1)).is_none());
        assert!(game.view(&(4, 6)).is_none());
        assert_eq!(game.turn, PieceTeam::Light);
    }

    #[test]
    fn double_step_raises_the_en_passant_flag_and_own_move_clears_it() {
        let mut game = GameState::new_game();
        apply_move(
            &mut game,
            &MoveDescription::normal(PieceTeam::Light, (3, 1), (3, 3)),
        );
        assert!(game.en_passant[PieceTeam::Light.index()][3]);

        // Dark replies; Light's flag must survive Dark's move...
        apply_move(
            &mut game,
            &MoveDescription::normal(PieceTeam::Dark, (6, 7), (5, 5)),
        );
        assert!(game.en_passant[PieceTeam::Light.index()][3]);

        // ...and expire as soon as Light moves again.
        apply_move(
            &mut game,
            &MoveDescription::normal(PieceTeam::Light, (6, 0), (5, 2)),
        );
        assert!(!game.en_passant[PieceTeam::Light.index()][3]);
    }

    #[test]
    fn en_passant_capture_removes_the_bypassed_pawn() {
        let mut game = GameState::from_fen("7k/8/8/3pP3/8/8/8/7K w - - 0 1").unwrap();
        game.en_passant[PieceTeam::Dark.index()][3] = true;

        apply_move(
            &mut game,
            &MoveDescription::normal(PieceTeam::Light, (4, 4), (3, 5)),
        );
        assert_eq!(game.view(&(3, 5)), Some(&light_pawn()));
        assert!(game.view(&(3, 4)).is_none(), "captured pawn must be gone");
        assert!(game.view(&(4, 4)).is_none());
    }

    #[test]
    fn kingside_castle_moves_both_king_and_rook() {
        let mut game = GameState::from_fen("7k/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        apply_move(
            &mut game,
            &MoveDescription::castle(PieceTeam::Light, CastleSide::Kingside),
        );
        assert_eq!(
            game.view(&(6, 0)),
            Some(&PieceRecord {
                class: PieceClass::King,
                team: PieceTeam::Light
            })
        );
        assert_eq!(
            game.view(&(5, 0)),
            Some(&PieceRecord {
                class: PieceClass::Rook,
                team: PieceTeam::Light
            })
        );
        assert!(game.view(&(4, 0)).is_none());
        assert!(game.view(&(7, 0)).is_none());
        assert!(game.king_moved[PieceTeam::Light.index()]);
    }

    #[test]
    fn queenside_castle_moves_both_king_and_rook() {
        let mut game = GameState::from_fen("7k/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        apply_move(
            &mut game,
            &MoveDescription::castle(PieceTeam::Light, CastleSide::Queenside),
        );
        assert_eq!(
            game.view(&(2, 0)).map(|p| p.class),
            Some(PieceClass::King)
        );
        assert_eq!(
            game.view(&(3, 0)).map(|p| p.class),
            Some(PieceClass::Rook)
        );
        assert!(game.view(&(0, 0)).is_none());
        assert!(game.view(&(4, 0)).is_none());
    }

    #[test]
    fn promotion_replaces_the_pawn_with_the_chosen_piece() {
        let mut game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        apply_move(
            &mut game,
            &MoveDescription::promotion(PieceTeam::Light, (0, 6), (0, 7), PieceClass::Knight),
        );
        assert_eq!(
            game.view(&(0, 7)),
            Some(&PieceRecord {
                class: PieceClass::Knight,
                team: PieceTeam::Light
            })
        );
        assert!(game.view(&(0, 6)).is_none());
    }

    #[test]
    fn moving_a_home_file_rook_forfeits_that_wing() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        apply_move(
            &mut game,
            &MoveDescription::normal(PieceTeam::Light, (0, 0), (0, 3)),
        );
        assert!(game.rook_moved[PieceTeam::Light.index()][CastleSide::Queenside.index()]);
        assert!(!game.rook_moved[PieceTeam::Light.index()][CastleSide::Kingside.index()]);
    }

    #[test]
    fn no_move_is_a_complete_no_op() {
        let mut game = GameState::new_game();
        let before = game.clone();
        apply_move(&mut game, &MoveDescription::no_move(PieceTeam::Light));
        assert_eq!(game, before);
    }
}
