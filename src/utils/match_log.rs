//! Self-play match driver with a PGN-flavored text log.
//!
//! `play_self_match` pits the search against itself from an arbitrary
//! position and records every move it plays. The resulting [`MatchLog`]
//! renders as bracketed headers (date and time stamped at match start)
//! followed by numbered long-algebraic movetext and a result token.

use chrono::Local;

use crate::apply_move_to_game::apply_move;
use crate::game_state::chess_types::PieceTeam;
use crate::game_state::game_state::GameState;
use crate::inspect_check::{king_in_checkmate, king_in_stalemate};
use crate::search::negamax::{choose_move, SearchContext};

/// How a self-play match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WinByCheckmate(PieceTeam),
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    /// The conventional result token for the log.
    pub fn result_token(&self) -> &'static str {
        match self {
            MatchOutcome::WinByCheckmate(PieceTeam::Light) => "1-0",
            MatchOutcome::WinByCheckmate(PieceTeam::Dark) => "0-1",
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => "1/2-1/2",
        }
    }
}

/// The record of one finished self-play match.
#[derive(Debug, Clone)]
pub struct MatchLog {
    pub date_header: String,
    pub time_header: String,
    pub moves: Vec<String>,
    pub outcome: MatchOutcome,
    pub final_state: GameState,
}

impl MatchLog {
    /// Render the match as header lines plus numbered movetext, one full
    /// move per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("[Date \"{}\"]\n", self.date_header));
        out.push_str(&format!("[Time \"{}\"]\n", self.time_header));
        out.push_str(&format!("[Result \"{}\"]\n", self.outcome.result_token()));
        out.push('\n');

        for (ply, lan) in self.moves.iter().enumerate() {
            if ply % 2 == 0 {
                out.push_str(&format!("{}. {}", (ply / 2) + 1, lan));
            } else {
                out.push_str(&format!(" {}\n", lan));
            }
        }
        if self.moves.len() % 2 == 1 {
            out.push('\n');
        }
        out.push_str(self.outcome.result_token());
        out.push('\n');
        out
    }
}

/// Play the search against itself from `start`, at a fixed depth, for at
/// most `max_plies` half-moves. The caller's context supplies tie-break
/// randomness; a deterministic context replays the same match every time.
pub fn play_self_match(
    start: &GameState,
    depth: u8,
    max_plies: u16,
    ctx: &mut SearchContext,
) -> MatchLog {
    let now = Local::now();
    let date_header = now.format("%Y.%m.%d").to_string();
    let time_header = now.format("%H:%M:%S").to_string();

    let mut game = start.clone();
    let mut moves = Vec::new();
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for _ in 0..max_plies {
        let mover = game.turn;
        let mv = choose_move(&game, depth, ctx);
        if mv.is_no_move() {
            outcome = if king_in_checkmate(&game, mover) {
                MatchOutcome::WinByCheckmate(mover.opposite())
            } else {
                MatchOutcome::DrawStalemate
            };
            break;
        }
        moves.push(mv.to_long_algebraic());
        apply_move(&mut game, &mv);
    }

    // A checkmate or stalemate delivered on the final allowed ply still
    // counts as such.
    if outcome == MatchOutcome::DrawMaxPlies {
        let mover = game.turn;
        if king_in_checkmate(&game, mover) {
            outcome = MatchOutcome::WinByCheckmate(mover.opposite());
        } else if king_in_stalemate(&game, mover) {
            outcome = MatchOutcome::DrawStalemate;
        }
    }

    MatchLog {
        date_header,
        time_header,
        moves,
        outcome,
        final_state: game,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_move_legal;
    use crate::move_description::MoveDescription;

    #[test]
    fn a_forced_mate_ends_the_match_immediately() {
        // Light mates in one with Ra1-a8; the match must end 1-0 after a
        // single ply.
        let start = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut ctx = SearchContext::deterministic();
        let log = play_self_match(&start, 2, 50, &mut ctx);
        assert_eq!(log.outcome, MatchOutcome::WinByCheckmate(PieceTeam::Light));
        assert_eq!(log.moves, vec!["a1a8".to_string()]);
        assert_eq!(log.outcome.result_token(), "1-0");
    }

    #[test]
    fn every_logged_move_was_legal_when_played() {
        let start = GameState::new_game();
        let mut ctx = SearchContext::deterministic();
        let log = play_self_match(&start, 1, 6, &mut ctx);
        assert_eq!(log.moves.len(), 6);

        let mut replay = start.clone();
        for lan in &log.moves {
            let mv = MoveDescription::from_long_algebraic(&replay, lan).unwrap();
            assert!(is_move_legal(&replay, &mv));
            apply_move(&mut replay, &mv);
        }
        assert_eq!(replay, log.final_state);
    }

    #[test]
    fn the_render_carries_headers_and_numbered_movetext() {
        let start = GameState::new_game();
        let mut ctx = SearchContext::deterministic();
        let log = play_self_match(&start, 1, 4, &mut ctx);
        let text = log.render();
        assert!(text.starts_with("[Date \""));
        assert!(text.contains("[Time \""));
        assert!(text.contains("[Result \"1/2-1/2\"]"));
        assert!(text.contains("1. "));
        assert!(text.contains("2. "));
        assert!(text.trim_end().ends_with("1/2-1/2"));
    }
}
