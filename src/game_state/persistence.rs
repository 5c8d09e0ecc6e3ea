//! Session snapshots for an external store.
//!
//! A save is a JSON envelope around the whole `GameSession`. Loading
//! validates the decoded state before handing it back; `load_or_new` turns
//! any failure into a fresh session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::session::{GameSession, SessionConfig};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    pub format_version: u32,
    /// Informational only.
    pub saved_at: DateTime<Utc>,
    pub session: GameSession,
}

pub fn serialize(session: &GameSession) -> ChessResult<String> {
    let saved = SavedGame {
        format_version: FORMAT_VERSION,
        saved_at: Utc::now(),
        session: session.clone(),
    };
    Ok(serde_json::to_string(&saved)?)
}

pub fn deserialize(blob: &str) -> ChessResult<GameSession> {
    let saved: SavedGame = serde_json::from_str(blob)?;
    if saved.format_version != FORMAT_VERSION {
        return Err(ChessError::UnsupportedFormat {
            version: saved.format_version,
        });
    }
    saved.session.game.validate()?;
    info!(
        saved_at = %saved.saved_at,
        plies = saved.session.game.move_log.len(),
        "loaded saved game"
    );
    Ok(saved.session)
}

/// Restores a saved session, or starts a new one with `config` when the
/// blob is missing or unusable. The score is lost in the fallback.
pub fn load_or_new(blob: Option<&str>, config: SessionConfig) -> GameSession {
    let Some(blob) = blob else {
        return GameSession::new(config);
    };
    match deserialize(blob) {
        Ok(session) => session,
        Err(e) => {
            warn!("Failed to load saved game: {}. Starting a new one.", e);
            GameSession::new(config)
        }
    }
}
