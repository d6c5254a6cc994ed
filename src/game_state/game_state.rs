//! Full per-position state: board grid, side to move, and the rights flags.
//!
//! `GameState` is the value the whole engine passes around. It is cheap to
//! clone, and the search relies on that: every explored move operates on a
//! private clone, so a parent node is never disturbed by its children.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, STARTING_POSITION_FEN};
use crate::game_state::chess_types::{CastleSide, PieceClass, PieceRecord, PieceTeam};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Aggregate position state, copied by value across search nodes.
///
/// Invariants (for positions reached through legal play):
/// - exactly one king of each team is on the board;
/// - `en_passant[team]` flags are only ever set for the side that just made
///   a double pawn step, and expire when that side next moves.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Piece placement, indexed `[rank][file]`, `None` for empty squares.
    pub board: [[Option<PieceRecord>; 8]; 8],
    /// Side to move.
    pub turn: PieceTeam,
    /// Whether each team's king has ever moved, indexed by team.
    pub king_moved: [bool; 2],
    /// Whether each rook has ever moved, indexed `[team][castle side]`.
    pub rook_moved: [[bool; 2]; 2],
    /// Per-file en-passant eligibility, indexed `[team][file]`. A set flag
    /// means that team's pawn on that file just advanced two squares and may
    /// be captured en passant on the very next ply.
    pub en_passant: [[bool; 8]; 2],
}

impl GameState {
    /// An empty board with Light to move and full castling rights. Mostly a
    /// scaffold for the FEN parser and for tests that place pieces by hand.
    pub fn new_empty() -> Self {
        GameState {
            board: [[None; 8]; 8],
            turn: PieceTeam::Light,
            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],
            en_passant: [[false; 8]; 2],
        }
    }

    /// The standard starting arrangement.
    pub fn new_game() -> Self {
        let mut game = Self::new_empty();
        for file in 0..8 {
            for team in [PieceTeam::Light, PieceTeam::Dark] {
                game.place(
                    (file, team.pawn_rank()),
                    PieceRecord {
                        class: PieceClass::Pawn,
                        team,
                    },
                );
                game.place(
                    (file, team.home_rank()),
                    PieceRecord {
                        class: BACK_RANK_LAYOUT[file as usize],
                        team,
                    },
                );
            }
        }
        game
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Starting-position FEN, re-exported for callers that reset games.
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    /// The piece on a square, if any. The location must be on the board.
    #[inline]
    pub fn view(&self, location: &BoardLocation) -> Option<&PieceRecord> {
        self.board[location.1 as usize][location.0 as usize].as_ref()
    }

    /// Put a piece on a square, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, location: BoardLocation, piece: PieceRecord) {
        self.board[location.1 as usize][location.0 as usize] = Some(piece);
    }

    /// Empty a square, returning the piece that was there.
    #[inline]
    pub fn clear(&mut self, location: BoardLocation) -> Option<PieceRecord> {
        self.board[location.1 as usize][location.0 as usize].take()
    }

    #[inline]
    pub fn is_occupied(&self, location: &BoardLocation) -> bool {
        self.view(location).is_some()
    }

    #[inline]
    pub fn is_occupied_by(&self, location: &BoardLocation, team: PieceTeam) -> bool {
        matches!(self.view(location), Some(piece) if piece.team == team)
    }

    /// Locate the given team's king.
    pub fn find_king(&self, team: PieceTeam) -> Result<BoardLocation, ChessErrors> {
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(piece) = self.view(&(file, rank)) {
                    if piece.class == PieceClass::King && piece.team == team {
                        return Ok((file, rank));
                    }
                }
            }
        }
        Err(ChessErrors::MissingKing(team))
    }

    /// Every square currently occupied by the given team, rank by rank.
    /// The sequence is lazy, so consumers that stop early (first-legal-move
    /// probes, threat scans) do not pay for the rest of the board.
    pub fn team_locations(&self, team: PieceTeam) -> impl Iterator<Item = BoardLocation> + '_ {
        (0..8i8)
            .flat_map(|rank| (0..8i8).map(move |file| (file, rank)))
            .filter(move |location| self.is_occupied_by(location, team))
    }

    /// True when neither the king nor the relevant rook of `team` has moved.
    /// This is the bookkeeping half of castling eligibility; the geometric
    /// and safety conditions live in the check-inspection module.
    #[inline]
    pub fn castling_rights_intact(&self, team: PieceTeam, side: CastleSide) -> bool {
        !self.king_moved[team.index()] && !self.rook_moved[team.index()][side.index()]
    }
}
