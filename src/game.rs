use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::players::PlayerRegistry;
use crate::types::{
    Announcement, Cell, GameState, Outcome, Phase, Player, RoundOutcome, Symbol,
};
use crate::view::BoardView;

/// Winning lines in evaluation order: rows, columns, diagonals.
pub const WIN_CONDITIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Receives frames and result notifications from the controller.
pub trait Presenter {
    /// Called after every state change.
    fn render(&mut self, view: &BoardView);

    /// Called once per finished game, after the terminal frame was rendered.
    fn announce(&mut self, announcement: &Announcement);
}

/// Presenter that drops everything. Callers read state back directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn render(&mut self, _view: &BoardView) {}

    fn announce(&mut self, _announcement: &Announcement) {}
}

/// Returns the first line fully owned by `symbol`, if any.
pub fn check_win(board: &Board, symbol: Symbol) -> Option<[usize; 3]> {
    let cells = board.cells();
    WIN_CONDITIONS
        .iter()
        .copied()
        .find(|combo| combo.iter().all(|&i| cells[i] == Cell::Filled(symbol)))
}

/// True when no cell is empty. Only meaningful after `check_win` found nothing.
pub fn check_tie(board: &Board) -> bool {
    board.is_full()
}

pub struct GameController {
    board: Board,
    players: PlayerRegistry,
    turn: usize,
    phase: Phase,
    outcome: Option<Outcome>,
    result_delay_ms: u32,
    presenter: Box<dyn Presenter>,
}

impl GameController {
    /// Caller contract: `config` has passed `GameConfig::validate`.
    pub fn new(config: &GameConfig, presenter: Box<dyn Presenter>) -> Self {
        Self {
            board: Board::new(),
            players: PlayerRegistry::new(config),
            turn: 0,
            phase: Phase::InProgress,
            outcome: None,
            result_delay_ms: config.result_delay_ms,
            presenter,
        }
    }

    pub fn headless() -> Self {
        Self::new(&GameConfig::default(), Box::new(HeadlessPresenter))
    }

    /// The player whose turn it is (the winner, once a game is won).
    pub fn player(&self) -> &Player {
        self.players.get(self.turn)
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Places the current player's mark at `index`.
    ///
    /// A filled cell or a finished game leaves everything untouched and
    /// yields `RoundOutcome::Ignored`. Win is checked before tie, so a move
    /// that completes a line on the last empty cell is a win.
    pub fn play_round(&mut self, index: usize) -> Result<RoundOutcome> {
        let cell = self.board.get(index)?;
        if self.is_over() || !cell.is_empty() {
            debug!(index, phase = ?self.phase, cell = cell.as_str(), "ignoring move");
            return Ok(RoundOutcome::Ignored);
        }

        let player = self.player().clone();
        self.board.set(index, player.symbol())?;
        debug!(index, player = player.name(), "placed mark\n{}", self.board);

        if let Some(combo) = check_win(&self.board, player.symbol()) {
            let outcome = Outcome::Win {
                winner: player,
                combo,
            };
            return Ok(self.finish(outcome));
        }

        if check_tie(&self.board) {
            return Ok(self.finish(Outcome::Draw));
        }

        self.switch_player();
        self.render();
        Ok(RoundOutcome::Continued {
            next: self.player().clone(),
        })
    }

    /// Passes the turn to the next registered player.
    pub fn switch_player(&mut self) {
        self.turn = self.players.next_index(self.turn);
    }

    /// Clears the board and starts a new game with the first player.
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.turn = 0;
        self.phase = Phase::InProgress;
        self.outcome = None;
        info!("game reset");
        self.render();
    }

    /// Pushes the current frame to the presenter.
    pub fn render(&mut self) {
        let view = self.view();
        self.presenter.render(&view);
    }

    pub fn view(&self) -> BoardView {
        BoardView::new(
            &self.board,
            self.player(),
            self.outcome.as_ref().and_then(Outcome::winning_combo),
            self.is_over(),
        )
    }

    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.cells(),
            current_player: self.player().clone(),
            game_over: self.is_over(),
            outcome: self.outcome.clone(),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> RoundOutcome {
        self.phase = Phase::Over;
        self.outcome = Some(outcome.clone());
        info!(result = %outcome.message(), "game over");

        self.render();
        let announcement = Announcement {
            message: outcome.message(),
            delay_ms: self.result_delay_ms,
            outcome: outcome.clone(),
        };
        self.presenter.announce(&announcement);

        RoundOutcome::Finished { outcome }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: usize) {
        self.board = board;
        self.turn = turn;
        self.phase = Phase::InProgress;
        self.outcome = None;
    }
}
