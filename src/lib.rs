//! Crate root module declarations for the mailbox chess engine.
//!
//! Exposes the rules core (board model, move generation, check and terminal
//! detection), the game controller with undo and persistence, and the
//! difficulty-tiered move selectors used to play the computer side.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod captured;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod geometry;
    pub mod persistence;
    pub mod position;
    pub mod session;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod ai_move_selector;
    pub mod engine_greedy;
    pub mod engine_lookahead;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}
