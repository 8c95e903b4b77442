use serde::Serialize;

use crate::board::Board;
use crate::types::Player;

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub index: u8,
    pub symbol: &'static str,
    pub filled: bool,
    pub highlighted: bool,
}

/// Frame handed to the presentation layer after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub cells: Vec<CellView>,
    pub status: String,
    pub game_over: bool,
}

impl BoardView {
    /// Builds a frame. Cells listed in `highlight` are emphasized.
    pub fn new(
        board: &Board,
        current: &Player,
        highlight: Option<[usize; 3]>,
        game_over: bool,
    ) -> Self {
        let cells = board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| CellView {
                index: index as u8,
                symbol: cell.as_str(),
                filled: !cell.is_empty(),
                highlighted: highlight.is_some_and(|combo| combo.contains(&index)),
            })
            .collect();

        Self {
            cells,
            status: format!("{}'s turn", current.name()),
            game_over,
        }
    }

    pub fn highlighted(&self) -> Vec<u8> {
        self.cells
            .iter()
            .filter(|cell| cell.highlighted)
            .map(|cell| cell.index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn frame_marks_filled_cells_and_turn() {
        let board: Board = "X...O....".parse().unwrap();
        let view = BoardView::new(
            &board,
            &Player::new("Player 1", Symbol::X),
            None,
            false,
        );

        assert_eq!(view.cells.len(), 9);
        assert_eq!(view.status, "Player 1's turn");
        assert!(view.cells[0].filled);
        assert_eq!(view.cells[4].symbol, "O");
        assert!(!view.cells[1].filled);
        assert_eq!(view.cells[1].symbol, "");
        assert!(view.highlighted().is_empty());
    }

    #[test]
    fn winning_combo_is_highlighted() {
        let board: Board = "XXXOO....".parse().unwrap();
        let view = BoardView::new(
            &board,
            &Player::new("Player 1", Symbol::X),
            Some([0, 1, 2]),
            true,
        );

        assert_eq!(view.highlighted(), vec![0, 1, 2]);
        assert!(view.game_over);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let view = BoardView::new(
            &Board::new(),
            &Player::new("Player 2", Symbol::O),
            None,
            false,
        );
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["gameOver"], false);
        assert_eq!(json["cells"][3]["highlighted"], false);
        assert_eq!(json["status"], "Player 2's turn");
    }
}
