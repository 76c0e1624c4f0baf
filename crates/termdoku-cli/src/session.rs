//! The interactive game session.
//!
//! The loop reads one move per line — three whitespace-separated
//! numbers: row, column, digit, each 1-9 — applies it to the board, and
//! re-renders. A literal `0` in any of the three positions quits, and
//! the positions are checked in order: a `0` row quits before the rest
//! of the line is even looked at.
//!
//! The loop is written against injected [`BufRead`]/[`Write`] handles
//! rather than process stdio, so complete sessions can be driven from
//! tests (and the core never has to know where its output goes).

use std::io::{self, BufRead, Write};

use termdoku_game::Board;

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// A quit sentinel (`0`) in the row, column, or number position.
    Quit,
    /// A complete move. Components are raw and may still be out of the
    /// board's 1-9 range; the board is the range authority.
    Move { row: u8, col: u8, number: u8 },
    /// Missing or unparseable tokens.
    Invalid,
}

fn parse_command(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let mut next_number = move || tokens.next().and_then(|token| token.parse::<u8>().ok());

    let Some(row) = next_number() else {
        return Command::Invalid;
    };
    if row == 0 {
        return Command::Quit;
    }
    let Some(col) = next_number() else {
        return Command::Invalid;
    };
    if col == 0 {
        return Command::Quit;
    }
    let Some(number) = next_number() else {
        return Command::Invalid;
    };
    if number == 0 {
        return Command::Quit;
    }

    Command::Move { row, col, number }
}

/// Runs a game session to completion.
///
/// Returns once the board is solved, the player enters the quit
/// sentinel, or the input reaches end-of-file.
///
/// # Errors
///
/// Returns any I/O error raised by the injected reader or writer.
pub fn run<R, W>(mut board: Board, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "--- Termdoku ---")?;
    writeln!(
        output,
        "Enter row, column, and number (1-9). Enter 0 to quit."
    )?;

    let mut line = String::new();
    while !board.is_solved() {
        writeln!(output)?;
        write!(output, "{board}")?;
        write!(output, "enter your move (row col num): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input quits like the 0 sentinel.
            break;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Invalid => {
                writeln!(output, "moves are three numbers: row col num. Try again.")?;
            }
            Command::Move { row, col, number } => {
                if let Err(reason) = board.place_number(row, col, number) {
                    log::debug!("rejected move {row} {col} {number}: {reason}");
                    writeln!(output, "{reason}. Try again.")?;
                }
            }
        }
    }

    writeln!(output)?;
    if board.is_solved() {
        writeln!(output, "Congratulations! You solved the puzzle!")?;
    } else {
        writeln!(output, "Exiting game.")?;
    }
    write!(output, "{board}")?;
    Ok(())
}
