use crate::config::GameConfig;
use crate::types::{Player, Symbol};

const PLAYER_COUNT: usize = 2;
const SYMBOLS: [Symbol; PLAYER_COUNT] = [Symbol::X, Symbol::O];

/// The two players in turn order. Index 0 moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: [Player; PLAYER_COUNT],
}

impl PlayerRegistry {
    pub fn new(config: &GameConfig) -> Self {
        let [first, second] = &config.player_names;
        Self {
            players: [
                Player::new(first.as_str(), SYMBOLS[0]),
                Player::new(second.as_str(), SYMBOLS[1]),
            ],
        }
    }

    /// Caller contract: `index < self.len()`; turn indices come from
    /// `next_index`, which keeps them in range.
    pub fn get(&self, index: usize) -> &Player {
        &self.players[index % PLAYER_COUNT]
    }

    pub fn first(&self) -> &Player {
        &self.players[0]
    }

    pub fn len(&self) -> usize {
        PLAYER_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Index of the player who moves after `index`.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % PLAYER_COUNT
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
