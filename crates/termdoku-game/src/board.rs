//! The rule-checked game board.

use std::fmt::{self, Display};

use termdoku_core::{Digit, DigitGrid, Position};

use crate::{CellState, PlaceError};

/// A 9×9 Sudoku board with rule-checked mutation.
///
/// A board is seeded once from a [`DigitGrid`]; every seeded digit
/// becomes a given cell that no later move can touch. All mutation goes
/// through [`Board::place_number`], which validates the move before
/// applying it and leaves the board untouched on rejection.
///
/// # Examples
///
/// ```
/// use termdoku_core::DigitGrid;
/// use termdoku_game::Board;
///
/// let seed: DigitGrid = "
///     53..7....
///     6..195...
///     .98....6.
///     8...6...3
///     4..8.3..1
///     7...2...6
///     .6....28.
///     ...419..5
///     ....8..79
/// "
/// .parse()
/// .expect("valid grid");
///
/// let mut board = Board::new(&seed);
/// board.place_number(1, 3, 4).unwrap();
/// assert_eq!(board.value(0, 2), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
}

impl Board {
    /// Creates a board from a seed grid.
    ///
    /// Every digit in the seed becomes a given cell; the rest start
    /// empty. The seed is copied, and its Sudoku-legality is *not*
    /// checked: an inconsistent seed is accepted as-is, and only future
    /// placements are validated against it.
    #[must_use]
    pub fn new(seed: &DigitGrid) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = seed[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns the numeric value of the cell at 0-based `row`/`col`,
    /// with 0 meaning empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8. Out-of-range
    /// access here is a programming error, not a recoverable condition;
    /// player input goes through [`Board::place_number`], which range
    /// checks before converting.
    #[must_use]
    pub fn value(&self, row: u8, col: u8) -> u8 {
        self.cell(Position::new(col, row)).value()
    }

    /// Applies a player move.
    ///
    /// `row`, `col`, and `number` are all 1-based, matching what a
    /// player types. Checks run in a fixed order — range, then lock,
    /// then rules — and the board is left unchanged whenever any of
    /// them fails. A move onto a cell the player already filled simply
    /// overwrites it; there is no separate "occupied" outcome.
    ///
    /// The rule scan covers the target's entire row, column, and box,
    /// including the target cell itself. Re-entering the value a cell
    /// already holds therefore reports [`PlaceError::RuleConflict`]
    /// against that cell's own current value.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfRange`] if `row`, `col`, or `number` is
    ///   outside 1-9.
    /// - [`PlaceError::CellLocked`] if the target cell is a given.
    /// - [`PlaceError::RuleConflict`] if `number` already appears in the
    ///   target's row, column, or 3×3 box.
    pub fn place_number(&mut self, row: u8, col: u8, number: u8) -> Result<(), PlaceError> {
        let (Some(pos), Some(digit)) = (
            Position::try_new(col.wrapping_sub(1), row.wrapping_sub(1)),
            Digit::try_from_value(number),
        ) else {
            return Err(PlaceError::OutOfRange);
        };

        if self.cell(pos).is_given() {
            return Err(PlaceError::CellLocked);
        }
        if self.has_conflict(pos, digit) {
            return Err(PlaceError::RuleConflict);
        }

        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Returns whether every cell holds a digit.
    ///
    /// This checks fill only. It does *not* verify the Sudoku rules, so
    /// a completely filled board reports solved even when it contains
    /// conflicts; the rule checks in [`Board::place_number`] are the
    /// only line of defense, and a conflicting seed can still reach a
    /// conflicting "solved" state.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    fn has_conflict(&self, pos: Position, digit: Digit) -> bool {
        pos.row_positions()
            .chain(pos.column_positions())
            .chain(pos.box_positions())
            .any(|peer| self.cell(peer).digit() == Some(digit))
    }
}

/// Renders the board as nine rows of space-separated digits with 0 for
/// empty cells, a `-----------` rule between row bands, and a `|`
/// between column bands.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y % 3 == 0 && y != 0 {
                writeln!(f, "-----------")?;
            }
            for x in 0..9 {
                if x % 3 == 0 && x != 0 {
                    write!(f, "|")?;
                }
                write!(f, "{} ", self.cell(Position::new(x, y)).value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const STARTER_ROWS: [[u8; 9]; 9] = [
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ];

    const STARTER_SOLUTION: &str = "\
        534678912 \
        672195348 \
        198342567 \
        859761423 \
        426853791 \
        713924856 \
        961537284 \
        287419635 \
        345286179";

    fn starter_board() -> Board {
        Board::new(&DigitGrid::from_rows(STARTER_ROWS))
    }

    #[test]
    fn new_marks_seeded_cells_as_given() {
        let board = starter_board();

        assert_eq!(board.cell(Position::new(0, 0)), &CellState::Given(Digit::D5));
        assert_eq!(board.cell(Position::new(4, 0)), &CellState::Given(Digit::D7));
        assert_eq!(board.cell(Position::new(2, 0)), &CellState::Empty);

        let givens = Position::ALL
            .iter()
            .filter(|pos| board.cell(**pos).is_given())
            .count();
        assert_eq!(givens, 30);
    }

    #[test]
    fn value_reads_back_zero_based() {
        let board = starter_board();
        assert_eq!(board.value(0, 0), 5);
        assert_eq!(board.value(0, 2), 0);
        assert_eq!(board.value(8, 8), 9);
    }

    #[test]
    fn walkthrough_place_then_self_conflict_then_lock() {
        let mut board = starter_board();

        // 4 at row 1, col 3 conflicts with nothing in its row, column,
        // or box.
        assert_eq!(board.place_number(1, 3, 4), Ok(()));
        assert_eq!(board.value(0, 2), 4);

        // The identical move now collides with the 4 just placed.
        assert_eq!(board.place_number(1, 3, 4), Err(PlaceError::RuleConflict));
        assert_eq!(board.value(0, 2), 4);

        // The seeded 5 at row 1, col 1 is locked forever.
        assert_eq!(board.place_number(1, 1, 5), Err(PlaceError::CellLocked));
        assert_eq!(board.value(0, 0), 5);
    }

    #[test]
    fn out_of_range_components_are_rejected_without_mutation() {
        let mut board = starter_board();
        let before = board.clone();

        for (row, col, number) in [
            (0, 5, 5),
            (10, 5, 5),
            (5, 0, 5),
            (5, 10, 5),
            (5, 5, 0),
            (5, 5, 10),
            (255, 255, 255),
        ] {
            assert_eq!(
                board.place_number(row, col, number),
                Err(PlaceError::OutOfRange),
                "triple ({row}, {col}, {number})"
            );
            assert_eq!(board, before);
        }
    }

    #[test]
    fn range_check_runs_before_lock_check() {
        // Row 0 targets the locked (1, 1) cell only after 1-based
        // conversion; with an out-of-range row the lock must not be
        // consulted at all.
        let mut board = starter_board();
        assert_eq!(board.place_number(0, 1, 5), Err(PlaceError::OutOfRange));
    }

    #[test]
    fn given_cells_reject_every_number() {
        let mut board = starter_board();
        let before = board.clone();

        for number in 1..=9 {
            assert_eq!(
                board.place_number(1, 1, number),
                Err(PlaceError::CellLocked)
            );
            assert_eq!(board, before);
        }
    }

    #[test]
    fn lock_check_runs_before_rule_check() {
        // Placing 5 on the given 5 collides with itself under the rule
        // scan too; the lock outcome proves the lock check fires first.
        let mut board = starter_board();
        assert_eq!(board.place_number(1, 1, 5), Err(PlaceError::CellLocked));
    }

    #[test]
    fn conflicts_in_row_column_and_box_are_rejected() {
        let mut seed = DigitGrid::new();
        seed.set(Position::new(0, 0), Some(Digit::D7));
        let mut board = Board::new(&seed);
        let before = board.clone();

        // Same row.
        assert_eq!(board.place_number(1, 6, 7), Err(PlaceError::RuleConflict));
        // Same column.
        assert_eq!(board.place_number(6, 1, 7), Err(PlaceError::RuleConflict));
        // Same box.
        assert_eq!(board.place_number(2, 2, 7), Err(PlaceError::RuleConflict));
        assert_eq!(board, before);

        // Out of reach of all three houses.
        assert_eq!(board.place_number(5, 5, 7), Ok(()));
    }

    #[test]
    fn filled_cells_can_be_overwritten() {
        let mut board = starter_board();

        assert_eq!(board.place_number(1, 3, 4), Ok(()));
        assert_eq!(board.place_number(1, 3, 1), Ok(()));
        assert_eq!(board.value(0, 2), 1);
    }

    #[test]
    fn replacing_same_value_conflicts_with_itself() {
        let mut board = Board::new(&DigitGrid::new());

        assert_eq!(board.place_number(5, 5, 5), Ok(()));
        assert_eq!(board.place_number(5, 5, 5), Err(PlaceError::RuleConflict));
        assert_eq!(board.value(4, 4), 5);
    }

    #[test]
    fn solved_once_every_cell_is_filled() {
        let solution: DigitGrid = STARTER_SOLUTION.parse().expect("valid grid");

        let mut seed = solution.clone();
        seed.set(Position::new(8, 8), None);
        let mut board = Board::new(&seed);

        assert!(!board.is_solved());
        assert_eq!(board.place_number(9, 9, 9), Ok(()));
        assert!(board.is_solved());
    }

    #[test]
    fn solved_ignores_rule_violations() {
        // A board of eighty-one 1s is nonsense by the rules, but the
        // solved check only looks at fill.
        let board = Board::new(&DigitGrid::from_rows([[1; 9]; 9]));
        assert!(board.is_solved());
    }

    #[test]
    fn unsolved_while_any_cell_is_empty() {
        assert!(!starter_board().is_solved());
        assert!(!Board::new(&DigitGrid::new()).is_solved());
    }

    #[test]
    fn renders_with_band_separators() {
        let expected = concat!(
            "5 3 0 |0 7 0 |0 0 0 \n",
            "6 0 0 |1 9 5 |0 0 0 \n",
            "0 9 8 |0 0 0 |0 6 0 \n",
            "-----------\n",
            "8 0 0 |0 6 0 |0 0 3 \n",
            "4 0 0 |8 0 3 |0 0 1 \n",
            "7 0 0 |0 2 0 |0 0 6 \n",
            "-----------\n",
            "0 6 0 |0 0 0 |2 8 0 \n",
            "0 0 0 |4 1 9 |0 0 5 \n",
            "0 0 0 |0 8 0 |0 7 9 \n",
        );
        assert_eq!(starter_board().to_string(), expected);
    }

    proptest! {
        /// Any `u8` triple with a component outside 1-9 is rejected as
        /// out of range, and no rejected move of any kind mutates the
        /// board.
        #[test]
        fn place_number_range_and_no_mutation_contract(
            row in any::<u8>(),
            col in any::<u8>(),
            number in any::<u8>(),
        ) {
            let mut board = starter_board();
            let before = board.clone();
            let in_range = |v: u8| (1..=9).contains(&v);

            let result = board.place_number(row, col, number);

            if !(in_range(row) && in_range(col) && in_range(number)) {
                prop_assert_eq!(result, Err(PlaceError::OutOfRange));
            }
            if result.is_err() {
                prop_assert_eq!(&board, &before);
            }
        }
    }
}
