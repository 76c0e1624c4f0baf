//! Terminal front-end for the Termdoku board.
//!
//! Owns all text I/O: the interactive move loop lives in [`session`],
//! and this entry point only wires up the environment, parses the
//! command line, and hands the board plus stdio to the session.

use std::io;

use clap::Parser;
use termdoku_core::DigitGrid;
use termdoku_game::Board;

mod session;

/// The easy puzzle the game ships with.
const STARTER_PUZZLE: [[u8; 9]; 9] = [
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

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Starting puzzle as an 81-character grid string. `1`-`9` fill
    /// cells; `.`, `_`, and `0` leave them empty; whitespace is
    /// ignored.
    #[arg(long, value_name = "GRID")]
    puzzle: Option<DigitGrid>,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let seed = args
        .puzzle
        .unwrap_or_else(|| DigitGrid::from_rows(STARTER_PUZZLE));
    log::debug!("starting session with seed {seed}");

    let board = Board::new(&seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(board, stdin.lock(), stdout.lock())
}
