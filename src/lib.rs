//! Crate root module declarations for the Quince Chess engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, UCI protocol handling, and utility helpers) so binaries, tests,
//! and external tooling can import stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod movement_tables;
    pub mod perft;
}

pub mod search {
    pub mod negamax;
}

pub mod uci {
    pub mod uci_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod match_log;
    pub mod render_game_state;
}

pub mod apply_move_to_game;
pub mod board_location;
pub mod chess_errors;
pub mod inspect_check;
pub mod move_description;
pub mod scoring;
