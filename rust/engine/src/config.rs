use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;

/// Most computer opponents a table seats alongside the human.
pub const MAX_BOTS: usize = 3;

/// Default raise offered to the human when no amount is given.
pub const DEFAULT_RAISE: u32 = 50;

/// Bot skill level. Drives every probability and raise size of the bot policy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    #[serde(alias = "normal")]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidConfig(format!(
                "unknown difficulty '{}'",
                other
            ))),
        }
    }
}

/// A computer-controlled seat. Without its own difficulty the table's is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSeat {
    pub name: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl BotSeat {
    pub fn new(name: impl Into<String>, difficulty: Option<Difficulty>) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }
}

/// Everything the state machine needs from its collaborators, passed in at
/// construction instead of read from shared settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub difficulty: Difficulty,
    pub default_raise: u32,
    pub bots: Vec<BotSeat>,
    pub human_name: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            default_raise: DEFAULT_RAISE,
            bots: default_bots(),
            human_name: "You".into(),
        }
    }
}

pub fn default_bots() -> Vec<BotSeat> {
    ["Diego", "Lucas", "Abraão"]
        .into_iter()
        .map(|name| BotSeat::new(name, None))
        .collect()
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.bots.is_empty() {
            return Err(GameError::InvalidConfig(
                "at least one bot is required".into(),
            ));
        }
        if self.bots.len() > MAX_BOTS {
            return Err(GameError::InvalidConfig(format!(
                "at most {} bots are allowed, got {}",
                MAX_BOTS,
                self.bots.len()
            )));
        }
        if self.bots.iter().any(|b| b.name.trim().is_empty()) {
            return Err(GameError::InvalidConfig("bot names must not be empty".into()));
        }
        if self.default_raise == 0 {
            return Err(GameError::InvalidConfig(
                "default_raise must be >0".into(),
            ));
        }
        Ok(())
    }

    /// Difficulty the given bot plays at.
    pub fn bot_difficulty(&self, bot_index: usize) -> Difficulty {
        self.bots
            .get(bot_index)
            .and_then(|b| b.difficulty)
            .unwrap_or(self.difficulty)
    }

    pub fn seat_count(&self) -> usize {
        self.bots.len() + 1
    }
}
