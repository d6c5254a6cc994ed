//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, and position construction. The enum `ChessErrors` is
//! used as the single error type across the crate to simplify propagation
//! and matching. Each variant carries contextual information where
//! appropriate to aid diagnostics and user-facing error messages.
//!
//! Usage guidelines:
//! - Functions in the engine return `Result<..., ChessErrors>` for
//!   recoverable or expected failure modes (invalid input, malformed
//!   notation, moving from an empty square, etc).
//! - Parsing and input-related variants (`InvalidAlgebraicChar`,
//!   `InvalidAlgebraicString`, `InvalidFenString`) are recoverable and
//!   suitable for presenting to end users; a command loop typically rejects
//!   the offending line and keeps going.
//! - `MissingKing` indicates a corrupted position. It is not intended to be
//!   recovered from: a board without a king cannot be searched meaningfully.

use crate::{board_location::BoardLocation, game_state::chess_types::PieceTeam};

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ChessErrors {
    /// Attempted to move a piece from `BoardLocation` by the delta
    /// `(d_file, d_rank)` which would place it off the board.
    ///
    /// Payload: (origin_location, d_file, d_rank)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// A single character used during algebraic parsing was invalid
    /// (for example a file outside 'a'..'h' or a rank outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// A multi-character coordinate move string failed to parse.
    InvalidAlgebraicString(String),

    /// The provided FEN string is invalid or could not be parsed.
    /// Payload: a description of the offending field.
    InvalidFenString(String),

    /// Attempted to move a piece that does not exist at the specified
    /// location.
    NoPieceAtLocation(BoardLocation),

    /// The move names a side whose turn it is not.
    NotThisTeamsTurn(PieceTeam),

    /// The side to move has no legal move available (checkmate or
    /// stalemate). Reported by the search front-end when asked to pick a
    /// move in a finished game.
    NoLegalMoves,

    /// No king of the given team was found on the board. The position is
    /// structurally corrupt and further search would produce garbage.
    MissingKing(PieceTeam),
}
