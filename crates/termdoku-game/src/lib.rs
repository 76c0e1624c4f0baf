//! The Termdoku game board.
//!
//! This crate implements the playable part of the game: a 9×9 board
//! seeded from a puzzle, where the seeded cells are locked for the rest
//! of the game and every player move is validated against the board
//! bounds, the locked cells, and the Sudoku row/column/box rules before
//! it is applied.
//!
//! # Examples
//!
//! ```
//! use termdoku_core::DigitGrid;
//! use termdoku_game::{Board, PlaceError};
//!
//! let mut rows = [[0; 9]; 9];
//! rows[0] = [5, 3, 0, 0, 7, 0, 0, 0, 0];
//! let mut board = Board::new(&DigitGrid::from_rows(rows));
//!
//! // Row, column, and number are all 1-based.
//! board.place_number(1, 3, 4).unwrap();
//! assert_eq!(board.value(0, 2), 4);
//!
//! // The seeded 5 can never be replaced.
//! assert_eq!(board.place_number(1, 1, 9), Err(PlaceError::CellLocked));
//!
//! assert!(!board.is_solved());
//! ```

pub mod board;
pub mod cell_state;
pub mod error;

pub use self::{board::Board, cell_state::CellState, error::PlaceError};
