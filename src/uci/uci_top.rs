//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, maintains the current position, routes `go`
//! requests to the negamax search, and emits protocol-compliant output.
//! Two non-standard conveniences are kept for terminal play: `board`
//! prints the position, and `selfplay` runs a logged engine-vs-engine
//! match from the current position.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::apply_move_to_game::apply_move;
use crate::game_state::game_state::GameState;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_checks::is_move_legal;
use crate::search::negamax::{choose_move, SearchContext};
use crate::utils::match_log::play_self_match;
use crate::utils::render_game_state::render_game_state;

const UCI_ENGINE_NAME: &str = "Quince Chess";
const UCI_ENGINE_AUTHOR: &str = "the Quince Chess developers";

/// Search depth used when `go` carries no explicit depth.
const DEFAULT_SEARCH_DEPTH: u8 = 2;
/// Half-move cap for `selfplay` matches.
const DEFAULT_SELFPLAY_PLIES: u16 = 200;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct UciState {
    game_state: GameState,
    fixed_depth: u8,
    ctx: SearchContext,
}

impl UciState {
    fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            fixed_depth: DEFAULT_SEARCH_DEPTH,
            ctx: SearchContext::from_entropy(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", UCI_ENGINE_NAME)?;
                writeln!(out, "id author {}", UCI_ENGINE_AUTHOR)?;
                writeln!(
                    out,
                    "option name FixedDepth type spin default {} min 1 max 8",
                    DEFAULT_SEARCH_DEPTH
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {}", err)?;
                }
            }
            "ucinewgame" => {
                self.game_state = GameState::new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "info string position error: {}", err)?;
                }
            }
            "go" => {
                self.handle_go(trimmed, out)?;
            }
            "board" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                writeln!(out, "info string fen {}", self.game_state.get_fen())?;
            }
            "selfplay" => {
                self.handle_selfplay(parts.next(), out)?;
            }
            "stop" => {
                // Search is synchronous; nothing to interrupt.
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                // Unknown commands are ignored for UCI compatibility.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<String>::new();
        let mut value_tokens = Vec::<String>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok.to_owned()),
                _ if mode == "value" => value_tokens.push(tok.to_owned()),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case("FixedDepth") {
            let parsed = value
                .parse::<u8>()
                .map_err(|_| format!("invalid FixedDepth value '{}'", value))?;
            if parsed == 0 {
                return Err("FixedDepth must be at least 1".to_owned());
            }
            self.fixed_depth = parsed;
            Ok(())
        } else {
            Err(format!("unknown option '{}'", name))
        }
    }

    fn handle_position(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let mut base_state = if let Some(tok) = tokens.next() {
            match tok {
                "startpos" => GameState::new_game(),
                "fen" => {
                    let mut fen_parts = Vec::<String>::new();
                    while let Some(next) = tokens.peek() {
                        if *next == "moves" {
                            break;
                        }
                        fen_parts.push(tokens.next().unwrap_or_default().to_owned());
                    }
                    if fen_parts.is_empty() {
                        return Err("missing FEN after 'position fen'".to_owned());
                    }
                    let fen = fen_parts.join(" ");
                    GameState::from_fen(&fen).map_err(|e| format!("{:?}", e))?
                }
                other => return Err(format!("unsupported position token '{}'", other)),
            }
        } else {
            return Err("incomplete position command".to_owned());
        };

        if tokens.peek().copied() == Some("moves") {
            let _ = tokens.next();
            for lan in tokens {
                let mv = MoveDescription::from_long_algebraic(&base_state, lan)
                    .map_err(|e| format!("{:?}", e))?;
                if !is_move_legal(&base_state, &mv) {
                    return Err(format!("illegal move '{}'", lan));
                }
                apply_move(&mut base_state, &mv);
            }
        }

        self.game_state = base_state;
        Ok(())
    }

    fn handle_go(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let mut depth = self.fixed_depth;
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // "go"
        while let Some(tok) = tokens.next() {
            if tok == "depth" {
                if let Some(parsed) = tokens.next().and_then(|v| v.parse::<u8>().ok()) {
                    if parsed > 0 {
                        depth = parsed;
                    }
                }
            }
        }

        self.ctx.nodes_pondered = 0;
        let started = Instant::now();
        let mv = choose_move(&self.game_state, depth, &mut self.ctx);
        let elapsed_ms = started.elapsed().as_millis();

        writeln!(
            out,
            "info depth {} nodes {} time {}",
            depth, self.ctx.nodes_pondered, elapsed_ms
        )?;
        writeln!(out, "bestmove {}", mv.to_long_algebraic())?;
        Ok(())
    }

    fn handle_selfplay(&mut self, plies_arg: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let max_plies = plies_arg
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_SELFPLAY_PLIES);
        let log = play_self_match(&self.game_state, self.fixed_depth, max_plies, &mut self.ctx);
        writeln!(out, "{}", log.render())?;
        writeln!(out, "{}", render_game_state(&log.final_state))?;
        Ok(())
    }
}
