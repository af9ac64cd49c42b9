//! Scope game mode kind

use serde::{Deserialize, Serialize};

use crate::kind::FlagKind;

/// Game modes assignable to a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    /// Lower-case token produced by render
    pub fn token(self) -> &'static str {
        match self {
            GameMode::Survival => "survival",
            GameMode::Creative => "creative",
            GameMode::Adventure => "adventure",
            GameMode::Spectator => "spectator",
        }
    }
}

fn parse_gamemode(raw: &str) -> Result<GameMode, String> {
    match raw.to_lowercase().as_str() {
        "survival" | "0" | "s" => Ok(GameMode::Survival),
        "creative" | "1" | "c" => Ok(GameMode::Creative),
        "adventure" | "2" | "a" => Ok(GameMode::Adventure),
        "spectator" | "3" => Ok(GameMode::Spectator),
        _ => Err("there is no such game mode".to_string()),
    }
}

fn merge_replace(_current: GameMode, incoming: GameMode) -> GameMode {
    incoming
}

fn render_gamemode(value: &GameMode) -> String {
    value.token().to_string()
}

fn default_survival() -> GameMode {
    GameMode::Survival
}

/// Scope game mode. Merge: the incoming value replaces the current one.
pub static GAME_MODE: FlagKind<GameMode> = FlagKind::new(
    "GamemodeFlag",
    "survival",
    parse_gamemode,
    merge_replace,
    render_gamemode,
    default_survival,
);
