//! Fundamental types for the Termdoku game.
//!
//! This crate provides the small, typed vocabulary the rest of the
//! workspace is written in:
//!
//! - [`digit`]: type-safe Sudoku digits 1-9
//! - [`position`]: board coordinates with row/column/box arithmetic
//! - [`grid`]: an 81-cell grid of optional digits, the seed and
//!   interchange format for puzzles
//!
//! # Examples
//!
//! ```
//! use termdoku_core::{Digit, DigitGrid, Position};
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
//!
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(grid.get(Position::new(2, 0)), None);
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{DigitGrid, GridParseError},
    position::Position,
};
