//! Computer-vs-computer driver.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `SELF_PLAY_LIGHT=hard SELF_PLAY_DARK=easy SELF_PLAY_SEED=7 cargo run --release --bin self_play -- --verbose`

use std::str::FromStr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mailbox_chess::engines::ai_move_selector::AiMoveSelector;
use mailbox_chess::engines::engine_trait::{AiConfig, Difficulty};
use mailbox_chess::errors::ChessResult;
use mailbox_chess::game_state::chess_types::{Color, GameStatus};
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::utils::algebraic::move_to_coordinates;
use mailbox_chess::utils::render_game_state::render_game_state;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(name, raw = %raw, "ignoring unparsable environment variable");
                default
            }
        },
        Err(_) => default,
    }
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let light = env_or("SELF_PLAY_LIGHT", Difficulty::Hard);
    let dark = env_or("SELF_PLAY_DARK", Difficulty::Medium);
    let max_plies: usize = env_or("SELF_PLAY_MAX_PLIES", 200);
    let seed: Option<u64> = std::env::var("SELF_PLAY_SEED")
        .ok()
        .and_then(|raw| raw.parse().ok());

    let config = AiConfig {
        seed,
        ..AiConfig::default()
    };
    let mut light_selector = AiMoveSelector::new(light, &config);
    let mut dark_selector = AiMoveSelector::new(
        dark,
        &AiConfig {
            seed: seed.map(|s| s.wrapping_add(1)),
            ..config
        },
    );
    info!(
        light = %light_selector.difficulty(),
        light_engine = light_selector.engine_name(),
        dark = %dark_selector.difficulty(),
        dark_engine = dark_selector.engine_name(),
        max_plies,
        ?seed,
        "starting self-play"
    );

    let mut game = GameState::new_game();
    while !game.is_over() && game.move_log.len() < max_plies {
        let selector = match game.side_to_move() {
            Color::Light => &mut light_selector,
            Color::Dark => &mut dark_selector,
        };
        let Some(mv) = selector.choose_move(&game)? else {
            break;
        };
        let outcome = game.play_move(mv)?;
        if verbose {
            println!(
                "{:>3}. {:?} {}{}",
                game.move_log.len(),
                outcome.record.piece.color,
                move_to_coordinates(mv)?,
                if outcome.gives_check { "+" } else { "" }
            );
        }
    }

    println!("{}", render_game_state(&game));
    match game.status {
        GameStatus::Checkmate { winner } => {
            println!("{winner:?} wins after {} plies", game.move_log.len())
        }
        GameStatus::Stalemate => println!("draw by stalemate after {} plies", game.move_log.len()),
        GameStatus::Ongoing => println!("stopped at the {max_plies}-ply cap"),
    }
    println!(
        "material: {:+} centipawns for Light",
        game.captured.material_advantage()
    );
    Ok(())
}
