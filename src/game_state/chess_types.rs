//! Core piece and team types shared by the whole engine.
//!
//! These are deliberately small `Copy` enums; everything that varies per
//! position lives in [`crate::game_state::game_state::GameState`].

/// Side to move. Light is the first-moving side (white in standard sets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceTeam {
    Light,
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }

    /// Rank direction pawns of this team advance in.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => -1,
        }
    }

    /// Back rank where the king and rooks start.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 7,
        }
    }

    /// Rank where this team's pawns start.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 1,
            PieceTeam::Dark => 6,
        }
    }

    /// Rank a pawn of this team must occupy to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> i8 {
        match self {
            PieceTeam::Light => 4,
            PieceTeam::Dark => 3,
        }
    }
}

/// Piece kind (team is represented separately in [`PieceRecord`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceClass {
    /// Lowercase English name, used by human-readable move descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            PieceClass::Pawn => "pawn",
            PieceClass::Rook => "rook",
            PieceClass::Knight => "knight",
            PieceClass::Bishop => "bishop",
            PieceClass::Queen => "queen",
            PieceClass::King => "king",
        }
    }
}

/// Which wing a castling move is played toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }

    /// File the rook of this wing starts on.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 7,
        }
    }

    /// File offset the king travels when castling to this wing.
    #[inline]
    pub const fn king_travel(self) -> i8 {
        match self {
            CastleSide::Queenside => -2,
            CastleSide::Kingside => 2,
        }
    }
}

/// An occupied square: what stands there and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}
