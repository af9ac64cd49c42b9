//! Scope difficulty kind

use serde::{Deserialize, Serialize};

use crate::kind::FlagKind;

/// Difficulty levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Peaceful,
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Lower-case token accepted by parse and produced by render
    pub fn token(self) -> &'static str {
        match self {
            Difficulty::Peaceful => "peaceful",
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    match raw.to_lowercase().as_str() {
        "peaceful" => Ok(Difficulty::Peaceful),
        "easy" => Ok(Difficulty::Easy),
        "normal" => Ok(Difficulty::Normal),
        "hard" => Ok(Difficulty::Hard),
        _ => Err("invalid difficulty: available values are peaceful, easy, normal and hard".to_string()),
    }
}

fn merge_most_severe(current: Difficulty, incoming: Difficulty) -> Difficulty {
    current.max(incoming)
}

fn render_difficulty(value: &Difficulty) -> String {
    value.token().to_string()
}

fn default_normal() -> Difficulty {
    Difficulty::Normal
}

/// Scope difficulty. Merge: the more severe value wins.
pub static DIFFICULTY: FlagKind<Difficulty> = FlagKind::new(
    "DifficultyFlag",
    "peaceful",
    parse_difficulty,
    merge_most_severe,
    render_difficulty,
    default_normal,
);
