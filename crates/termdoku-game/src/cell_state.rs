//! Per-cell board state.

use derive_more::IsVariant;
use termdoku_core::Digit;

/// The state of a single board cell.
///
/// Cells seeded by the starting puzzle are [`Given`](CellState::Given)
/// and stay that way for the lifetime of the board; cells the player
/// fills are [`Filled`](CellState::Filled) and can be overwritten by
/// later moves.
///
/// # Examples
///
/// ```
/// use termdoku_core::Digit;
/// use termdoku_game::CellState;
///
/// let cell = CellState::Given(Digit::D5);
/// assert!(cell.is_given());
/// assert_eq!(cell.digit(), Some(Digit::D5));
/// assert_eq!(cell.value(), 5);
///
/// assert_eq!(CellState::Empty.value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A clue from the starting puzzle. Locked for the rest of the game.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
    /// No digit.
    Empty,
}

impl CellState {
    /// Returns the digit held by this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Returns the numeric value of this cell, with 0 meaning empty.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.digit() {
            Some(digit) => digit.value(),
            None => 0,
        }
    }
}
