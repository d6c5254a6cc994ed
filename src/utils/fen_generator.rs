//! GameState-to-FEN serializer, the inverse of the parser.
//!
//! Clock counters are not tracked by the engine, so the last two fields
//! are always emitted as "0 1".

use crate::game_state::chess_types::{CastleSide, PieceClass, PieceTeam};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::location_to_algebraic;

pub fn generate_fen(game: &GameState) -> String {
    let mut fen = String::new();

    for rank in (0..8).rev() {
        let mut empty_run = 0;
        for file in 0..8 {
            match game.view(&(file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
                        empty_run = 0;
                    }
                    fen.push(piece_letter(piece.class, piece.team));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game.turn {
        PieceTeam::Light => 'w',
        PieceTeam::Dark => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_field(game));

    fen.push(' ');
    fen.push_str(&en_passant_field(game));

    fen.push_str(" 0 1");
    fen
}

fn piece_letter(class: PieceClass, team: PieceTeam) -> char {
    let lower = match class {
        PieceClass::Pawn => 'p',
        PieceClass::Rook => 'r',
        PieceClass::Knight => 'n',
        PieceClass::Bishop => 'b',
        PieceClass::Queen => 'q',
        PieceClass::King => 'k',
    };
    match team {
        PieceTeam::Light => lower.to_ascii_uppercase(),
        PieceTeam::Dark => lower,
    }
}

fn castling_field(game: &GameState) -> String {
    let mut field = String::new();
    for (team, kingside_letter, queenside_letter) in [
        (PieceTeam::Light, 'K', 'Q'),
        (PieceTeam::Dark, 'k', 'q'),
    ] {
        if game.castling_rights_intact(team, CastleSide::Kingside) {
            field.push(kingside_letter);
        }
        if game.castling_rights_intact(team, CastleSide::Queenside) {
            field.push(queenside_letter);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}

fn en_passant_field(game: &GameState) -> String {
    for team in [PieceTeam::Light, PieceTeam::Dark] {
        for file in 0..8 {
            if game.en_passant[team.index()][file as usize] {
                // The target square is the one the pawn skipped over.
                let target_rank = match team {
                    PieceTeam::Light => 2,
                    PieceTeam::Dark => 5,
                };
                return location_to_algebraic(&(file, target_rank));
            }
        }
    }
    "-".to_string()
}
