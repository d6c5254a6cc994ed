//! FEN-to-GameState parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation
//! string: piece placement, side to move, castling rights mapped onto the
//! king/rook-moved bookkeeping, and the en-passant target square mapped
//! onto the per-file eligibility flags. The clock fields are validated but
//! not retained — the engine does not track move clocks.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{CastleSide, PieceClass, PieceRecord, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_location;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing board layout".to_string()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing side to move".to_string()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing castling rights".to_string()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing en-passant square".to_string()))?;

    let mut game = GameState::new_empty();
    parse_board(board_part, &mut game)?;
    game.turn = parse_side_to_move(side_part)?;
    parse_castling_rights(castling_part, &mut game)?;
    parse_en_passant(en_passant_part, &mut game)?;

    // Clock fields are optional here; validate them when present.
    for clock_part in parts {
        if clock_part.parse::<u16>().is_err() {
            return Err(ChessErrors::InvalidFenString(format!(
                "invalid clock field: {clock_part}"
            )));
        }
    }

    Ok(game)
}

fn parse_board(board_part: &str, game: &mut GameState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(
            "board layout must contain 8 ranks".to_string(),
        ));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        // FEN lists the 8th rank first.
        let rank = 7 - fen_rank_idx as i8;
        let mut file: i8 = 0;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as i8;
            } else {
                if file > 7 {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "rank overflows the board: {rank_str}"
                    )));
                }
                let team = if ch.is_ascii_uppercase() {
                    PieceTeam::Light
                } else {
                    PieceTeam::Dark
                };
                let class = match ch.to_ascii_lowercase() {
                    'p' => PieceClass::Pawn,
                    'r' => PieceClass::Rook,
                    'n' => PieceClass::Knight,
                    'b' => PieceClass::Bishop,
                    'q' => PieceClass::Queen,
                    'k' => PieceClass::King,
                    _ => {
                        return Err(ChessErrors::InvalidFenString(format!(
                            "unknown piece letter '{ch}'"
                        )))
                    }
                };
                game.place((file, rank), PieceRecord { class, team });
                file += 1;
            }
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenString(format!(
                "rank does not cover 8 files: {rank_str}"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<PieceTeam, ChessErrors> {
    match side_part {
        "w" => Ok(PieceTeam::Light),
        "b" => Ok(PieceTeam::Dark),
        other => Err(ChessErrors::InvalidFenString(format!(
            "invalid side to move: {other}"
        ))),
    }
}

/// Castling rights land on the moved-flags: a missing right is recorded as
/// "that rook has moved", and a side with no rights at all as "that king
/// has moved". Equivalent for play, since the flags only gate castling.
fn parse_castling_rights(castling_part: &str, game: &mut GameState) -> Result<(), ChessErrors> {
    let mut rights = [[false; 2]; 2]; // [team][side]
    if castling_part != "-" {
        for ch in castling_part.chars() {
            let (team, side) = match ch {
                'K' => (PieceTeam::Light, CastleSide::Kingside),
                'Q' => (PieceTeam::Light, CastleSide::Queenside),
                'k' => (PieceTeam::Dark, CastleSide::Kingside),
                'q' => (PieceTeam::Dark, CastleSide::Queenside),
                other => {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "invalid castling right '{other}'"
                    )))
                }
            };
            rights[team.index()][side.index()] = true;
        }
    }

    for team in [PieceTeam::Light, PieceTeam::Dark] {
        let team_rights = rights[team.index()];
        game.king_moved[team.index()] = !team_rights[0] && !team_rights[1];
        for side in [CastleSide::Queenside, CastleSide::Kingside] {
            game.rook_moved[team.index()][side.index()] = !team_rights[side.index()];
        }
    }

    Ok(())
}

/// The en-passant target square ("e3" means a Light pawn just landed on
/// e4) becomes a per-file eligibility flag for the side that double-stepped.
fn parse_en_passant(en_passant_part: &str, game: &mut GameState) -> Result<(), ChessErrors> {
    if en_passant_part == "-" {
        return Ok(());
    }
    let target = algebraic_to_location(en_passant_part)
        .map_err(|_| ChessErrors::InvalidFenString(format!(
            "invalid en-passant square: {en_passant_part}"
        )))?;
    let team = match target.1 {
        2 => PieceTeam::Light,
        5 => PieceTeam::Dark,
        _ => {
            return Err(ChessErrors::InvalidFenString(format!(
                "en-passant square on impossible rank: {en_passant_part}"
            )))
        }
    };
    game.en_passant[team.index()][target.0 as usize] = true;
    Ok(())
}
