use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];
/// Lets the terminal frame commit before a blocking result notification.
pub const DEFAULT_RESULT_DELAY_MS: u32 = 50;

/// Game configuration.
///
/// Every field is optional in the serialized form; missing fields take
/// their defaults. Symbols are fixed: the first player is always `X`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GameConfig {
    pub player_names: [String; 2],
    pub result_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: DEFAULT_PLAYER_NAMES.map(String::from),
            result_delay_ms: DEFAULT_RESULT_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self
            .player_names
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(GameError::InvalidConfig(format!(
                "player {} has a blank name",
                pos + 1
            )));
        }
        if self.player_names[0] == self.player_names[1] {
            return Err(GameError::InvalidConfig(
                "players must have distinct names".to_string(),
            ));
        }
        Ok(())
    }
}
