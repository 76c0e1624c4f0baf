//! The 81-cell digit grid.
//!
//! [`DigitGrid`] is the seed and interchange format for puzzles: a plain
//! row-major grid of optional digits with no Sudoku rules attached. Rule
//! checking lives in the game layer; a grid will happily hold an
//! inconsistent puzzle.
//!
//! # Grid strings
//!
//! Grids parse from 81-cell strings read row by row. The characters
//! `1`-`9` fill a cell, while `.`, `_`, and `0` leave it empty.
//! Whitespace is ignored, so grids can be written one row per line:
//!
//! ```
//! use termdoku_core::DigitGrid;
//!
//! let grid: DigitGrid = "
//!     53..7....
//!     6..195...
//!     .98....6.
//!     8...6...3
//!     4..8.3..1
//!     7...2...6
//!     .6....28.
//!     ...419..5
//!     ....8..79
//! "
//! .parse()
//! .expect("valid grid");
//! assert_eq!(grid.to_string().len(), 81);
//! ```

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// An error produced when parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The string contains a character that is neither a digit, an
    /// empty-cell marker, nor whitespace.
    #[display("invalid grid character {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The string does not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    CellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A 9×9 grid of optional digits in row-major order.
///
/// This is plain data: cells can be read and written freely, and no
/// Sudoku-legality validation is ever performed. The game layer builds
/// on top of it for rule-checked play.
///
/// # Examples
///
/// ```
/// use termdoku_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert_eq!(grid.get(Position::new(0, 0)), None);
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from nine rows of nine values, where 0 means
    /// empty.
    ///
    /// This is the constructor for compiled-in puzzles written as plain
    /// integer arrays.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use termdoku_core::{Digit, DigitGrid, Position};
    ///
    /// let mut rows = [[0; 9]; 9];
    /// rows[0][0] = 5;
    /// let grid = DigitGrid::from_rows(rows);
    ///
    /// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
    /// assert_eq!(grid.get(Position::new(1, 0)), None);
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let value = rows[pos.y() as usize][pos.x() as usize];
            if value != 0 {
                grid.set(pos, Some(Digit::from_value(value)));
            }
        }
        grid
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let digit = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => character
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::try_from_value),
                _ => return Err(GridParseError::InvalidCharacter { character }),
            };
            if count < 81 {
                grid.cells[count] = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::CellCount { count });
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
