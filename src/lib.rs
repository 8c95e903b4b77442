//! Two-player tic-tac-toe engine for the browser.
//!
//! The core (`board`, `players`, `game`) is plain Rust; `web` exposes it
//! through wasm-bindgen and pushes `view::BoardView` frames to JS.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod players;
pub mod types;
pub mod view;
pub mod web;

pub use board::Board;
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{GameController, HeadlessPresenter, Presenter};
pub use players::PlayerRegistry;
pub use types::{Announcement, Cell, GameState, Outcome, Phase, Player, RoundOutcome, Symbol};
pub use view::BoardView;
