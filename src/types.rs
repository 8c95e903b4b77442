use std::fmt;

use serde::Serialize;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Symbol),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns `""`, `"X"` or `"O"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Filled(symbol) => symbol.as_str(),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A registered player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Outcome {
    Win { winner: Player, combo: [usize; 3] },
    Draw,
}

impl Outcome {
    /// Result line shown to the players.
    pub fn message(&self) -> String {
        match self {
            Outcome::Win { winner, .. } => format!("{} wins!", winner.name()),
            Outcome::Draw => "Draw!".to_string(),
        }
    }

    pub fn winning_combo(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { combo, .. } => Some(*combo),
            Outcome::Draw => None,
        }
    }
}

/// What a single `play_round` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RoundOutcome {
    /// The cell was filled or the game was already over; nothing changed.
    Ignored,
    /// The mark was placed and the turn passed to `next`.
    Continued { next: Player },
    /// The mark ended the game.
    Finished { outcome: Outcome },
}

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    InProgress,
    Over,
}

/// Result notification handed to the presentation layer.
///
/// Contract:
/// - Delivered only after the terminal frame was rendered.
/// - `delay_ms` is how long the presenter should wait before surfacing
///   `message`; the core never sleeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub message: String,
    pub delay_ms: u32,
    pub outcome: Outcome,
}

/// Public game state snapshot returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: [Cell; 9],
    pub current_player: Player,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
}
