//! Move rejection reasons.

use derive_more::{Display, Error};

/// Why a move was rejected.
///
/// Every rejection is local and recoverable: the board is left exactly
/// as it was and the player can retry. The display text is meant for
/// humans; callers that need to branch should match on the variant.
///
/// # Examples
///
/// ```
/// use termdoku_core::DigitGrid;
/// use termdoku_game::{Board, PlaceError};
///
/// let mut board = Board::new(&DigitGrid::new());
/// assert_eq!(board.place_number(0, 1, 1), Err(PlaceError::OutOfRange));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The row, column, or number is outside the range 1-9.
    #[display("row, column, and number must all be between 1 and 9")]
    OutOfRange,
    /// The target cell is part of the starting puzzle.
    #[display("that cell is part of the starting puzzle and cannot be changed")]
    CellLocked,
    /// The number already appears in the target's row, column, or box.
    #[display("that number already appears in the same row, column, or box")]
    RuleConflict,
}
