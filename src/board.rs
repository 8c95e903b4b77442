use std::fmt;
use std::str::FromStr;

use crate::error::{GameError, Result};
use crate::types::{Cell, Symbol};

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// 3x3 board, cells in row-major order (row r, col c -> `3r + c`).
///
/// A pure data holder: it validates indices but not moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_LEN],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_LEN],
        }
    }

    pub fn from_cells(cells: [Cell; BOARD_LEN]) -> Self {
        Self { cells }
    }

    /// Returns a copy of all cells; mutating it never touches the board.
    pub fn cells(&self) -> [Cell; BOARD_LEN] {
        self.cells
    }

    pub fn get(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex(index))
    }

    /// Overwrites the cell unconditionally.
    pub fn set(&mut self, index: usize, symbol: Symbol) -> Result<()> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::InvalidIndex(index))?;
        *cell = Cell::Filled(symbol);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_LEN];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Maps a row/col pair to a cell index.
    pub fn index_of(row: usize, col: usize) -> Result<usize> {
        if row >= BOARD_WIDTH || col >= BOARD_WIDTH {
            return Err(GameError::InvalidPosition { row, col });
        }
        Ok(row * BOARD_WIDTH + col)
    }
}

/// Parses a 9-character layout such as `"XO.X.O..X"`.
/// Empty cells may be written as `.`, `-`, `_` or a space.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_LEN {
            return Err(GameError::InvalidBoard(format!(
                "expected {BOARD_LEN} cells, got {}",
                chars.len()
            )));
        }

        let mut cells = [Cell::Empty; BOARD_LEN];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch {
                'X' | 'x' => Cell::Filled(Symbol::X),
                'O' | 'o' => Cell::Filled(Symbol::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            for (col, cell) in line.iter().enumerate() {
                if col > 0 {
                    f.write_str("|")?;
                }
                match cell {
                    Cell::Empty => f.write_str(" ")?,
                    Cell::Filled(symbol) => write!(f, "{symbol}")?,
                }
            }
        }
        Ok(())
    }
}
