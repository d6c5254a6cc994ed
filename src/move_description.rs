//! Move representation and its coordinate-notation encoding.
//!
//! A [`MoveDescription`] carries the moving team plus a [`MoveKind`] tag.
//! Normal moves cover quiet moves and captures, including en-passant
//! captures (the executor recognizes those from board occupancy, so they
//! need no tag of their own). Castling is stored as a wing rather than
//! squares, promotions carry the chosen piece, and `NoMove` is the sentinel
//! the search returns from finished games.
//!
//! The textual encoding is long algebraic ("e2e4", "e7e8q"), the coordinate
//! format used by line-oriented engine protocols. Parsing needs the current
//! position: a king's two-file jump becomes a castle, and a pawn reaching
//! the far rank without a promotion letter defaults to a queen.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::chess_types::{CastleSide, PieceClass, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::{algebraic_to_location, location_to_algebraic};

/// The kind tag of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// A quiet move or capture from one square to another.
    Normal {
        from: BoardLocation,
        to: BoardLocation,
    },
    /// Castling toward the given wing.
    Castle(CastleSide),
    /// A pawn reaching the far rank, becoming `class`.
    Promotion {
        from: BoardLocation,
        to: BoardLocation,
        class: PieceClass,
    },
    /// Sentinel: no legal or selected move.
    NoMove,
}

/// A move together with the team making it. The team is redundant with the
/// position's side to move but keeps moves self-describing in logs and
/// protocol plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub team: PieceTeam,
    pub kind: MoveKind,
}

impl MoveDescription {
    pub fn normal(team: PieceTeam, from: BoardLocation, to: BoardLocation) -> Self {
        MoveDescription {
            team,
            kind: MoveKind::Normal { from, to },
        }
    }

    pub fn castle(team: PieceTeam, side: CastleSide) -> Self {
        MoveDescription {
            team,
            kind: MoveKind::Castle(side),
        }
    }

    pub fn promotion(
        team: PieceTeam,
        from: BoardLocation,
        to: BoardLocation,
        class: PieceClass,
    ) -> Self {
        MoveDescription {
            team,
            kind: MoveKind::Promotion { from, to, class },
        }
    }

    pub fn no_move(team: PieceTeam) -> Self {
        MoveDescription {
            team,
            kind: MoveKind::NoMove,
        }
    }

    #[inline]
    pub fn is_no_move(&self) -> bool {
        matches!(self.kind, MoveKind::NoMove)
    }

    /// The squares the king occupies before and after castling.
    pub fn castle_king_squares(team: PieceTeam, side: CastleSide) -> (BoardLocation, BoardLocation) {
        let rank = team.home_rank();
        let from = (KING_START_FILE, rank);
        let to = (KING_START_FILE + side.king_travel(), rank);
        (from, to)
    }

    /// Converts this move to long algebraic notation (e.g., "e2e4",
    /// "e7e8q"). Castling uses the king's fixed from/to pair; the `NoMove`
    /// sentinel encodes as the protocol null move "0000".
    pub fn to_long_algebraic(&self) -> String {
        match self.kind {
            MoveKind::Normal { from, to } => {
                format!("{}{}", location_to_algebraic(&from), location_to_algebraic(&to))
            }
            MoveKind::Promotion { from, to, class } => {
                let letter = match class {
                    PieceClass::Queen => 'q',
                    PieceClass::Rook => 'r',
                    PieceClass::Bishop => 'b',
                    PieceClass::Knight => 'n',
                    // pawn/king promotions never occur
                    _ => 'q',
                };
                format!(
                    "{}{}{}",
                    location_to_algebraic(&from),
                    location_to_algebraic(&to),
                    letter
                )
            }
            MoveKind::Castle(side) => {
                let (from, to) = Self::castle_king_squares(self.team, side);
                format!("{}{}", location_to_algebraic(&from), location_to_algebraic(&to))
            }
            MoveKind::NoMove => "0000".to_string(),
        }
    }

    /// Attempts to create a move from a long algebraic string and the
    /// current position. The position supplies the context notation alone
    /// lacks: whose piece stands on the origin square, whether a king's
    /// two-file jump is a castle, and whether a pawn push is a promotion.
    ///
    /// No legality check happens here; callers validate separately.
    pub fn from_long_algebraic(game: &GameState, text: &str) -> Result<Self, ChessErrors> {
        let text = text.trim();
        // Coordinate tokens are pure ASCII; anything else would also break
        // the byte slicing below.
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_string()));
        }

        let from = algebraic_to_location(&text[0..2])?;
        let to = algebraic_to_location(&text[2..4])?;
        let piece = game
            .view(&from)
            .copied()
            .ok_or(ChessErrors::NoPieceAtLocation(from))?;
        let team = piece.team;

        if text.len() == 5 {
            let class = match text.as_bytes()[4] as char {
                'q' | 'Q' => PieceClass::Queen,
                'r' | 'R' => PieceClass::Rook,
                'b' | 'B' => PieceClass::Bishop,
                'n' | 'N' => PieceClass::Knight,
                other => return Err(ChessErrors::InvalidAlgebraicChar(other)),
            };
            return Ok(MoveDescription::promotion(team, from, to, class));
        }

        if piece.class == PieceClass::King
            && from == (KING_START_FILE, team.home_rank())
            && to.1 == team.home_rank()
            && (to.0 - from.0).abs() == 2
        {
            let side = if to.0 > from.0 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            return Ok(MoveDescription::castle(team, side));
        }

        if piece.class == PieceClass::Pawn && (to.1 == 0 || to.1 == 7) {
            // No promotion letter supplied; queen is the conventional default.
            return Ok(MoveDescription::promotion(team, from, to, PieceClass::Queen));
        }

        Ok(MoveDescription::normal(team, from, to))
    }

    /// Human-readable description, e.g. "knight takes pawn at f6".
    pub fn describe(&self, game: &GameState) -> String {
        match self.kind {
            MoveKind::Normal { from, to } => {
                let mover = match game.view(&from) {
                    Some(piece) => piece.class.name(),
                    None => "piece",
                };
                match game.view(&to) {
                    Some(target) => format!(
                        "{} takes {} at {}",
                        mover,
                        target.class.name(),
                        location_to_algebraic(&to)
                    ),
                    None => format!("{} to {}", mover, location_to_algebraic(&to)),
                }
            }
            MoveKind::Promotion { to, class, .. } => {
                format!("pawn promoted to {} at {}", class.name(), location_to_algebraic(&to))
            }
            MoveKind::Castle(CastleSide::Kingside) => "castles kingside".to_string(),
            MoveKind::Castle(CastleSide::Queenside) => "castles queenside".to_string(),
            MoveKind::NoMove => "no move".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_moves_round_trip_through_long_algebraic() {
        let game = GameState::new_game();
        let mv = MoveDescription::from_long_algebraic(&game, "e2e4").unwrap();
        assert_eq!(mv, MoveDescription::normal(PieceTeam::Light, (4, 1), (4, 3)));
        assert_eq!(mv.to_long_algebraic(), "e2e4");
    }

    #[test]
    fn king_two_file_jump_parses_as_castling() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let kingside = MoveDescription::from_long_algebraic(&game, "e1g1").unwrap();
        assert_eq!(
            kingside,
            MoveDescription::castle(PieceTeam::Light, CastleSide::Kingside)
        );
        assert_eq!(kingside.to_long_algebraic(), "e1g1");

        let queenside = MoveDescription::from_long_algebraic(&game, "e1c1").unwrap();
        assert_eq!(
            queenside,
            MoveDescription::castle(PieceTeam::Light, CastleSide::Queenside)
        );
    }

    #[test]
    fn promotion_letter_is_parsed_and_defaulted() {
        let game = GameState::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let explicit = MoveDescription::from_long_algebraic(&game, "a7a8n").unwrap();
        assert_eq!(
            explicit,
            MoveDescription::promotion(PieceTeam::Light, (0, 6), (0, 7), PieceClass::Knight)
        );
        assert_eq!(explicit.to_long_algebraic(), "a7a8n");

        let defaulted = MoveDescription::from_long_algebraic(&game, "a7a8").unwrap();
        assert_eq!(
            defaulted,
            MoveDescription::promotion(PieceTeam::Light, (0, 6), (0, 7), PieceClass::Queen)
        );
    }

    #[test]
    fn malformed_strings_are_rejected() {
        let game = GameState::new_game();
        assert!(MoveDescription::from_long_algebraic(&game, "e2").is_err());
        assert!(MoveDescription::from_long_algebraic(&game, "z9e4").is_err());
        assert!(MoveDescription::from_long_algebraic(&game, "e2e4x").is_err());
        // origin square is empty
        assert!(MoveDescription::from_long_algebraic(&game, "e4e5").is_err());
    }

    #[test]
    fn non_ascii_strings_are_rejected_not_fatal() {
        // Multi-byte characters must fail cleanly even when they straddle
        // the square-name boundaries.
        let game = GameState::new_game();
        for bad in ["a\u{e9}1", "\u{e9}2e4", "e2e\u{e9}", "e2e4\u{265a}"] {
            assert_eq!(
                MoveDescription::from_long_algebraic(&game, bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_string()))
            );
        }
    }

    #[test]
    fn describe_names_captures() {
        let game = GameState::from_fen("7k/8/8/3p4/4N3/8/8/7K w - - 0 1").unwrap();
        let mv = MoveDescription::normal(PieceTeam::Light, (4, 3), (3, 4));
        assert_eq!(mv.describe(&game), "knight takes pawn at d5");
    }
}
