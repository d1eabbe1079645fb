//! Interactive play mode
//!
//! Prints a guess, waits for the feedback the game gave it, and repeats until
//! the puzzle is solved or no candidate is left.

use crate::core::{Feedback, Word};
use crate::solver::{Game, Outcome};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Solved on the given turn
    Solved(usize),
    /// No candidate satisfies the feedback given so far
    Exhausted,
    /// The user quit or input ran out
    Quit,
}

/// Run the interactive loop over `input`/`output`
///
/// Feedback uses one symbol per letter: `g` (green), `y` (yellow) and `x`
/// (grey). Malformed responses are reported and asked for again; `quit` ends
/// the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    words: &[Word],
    mut input: R,
    mut output: W,
) -> Result<PlayOutcome> {
    let mut game = Game::new(words);

    writeln!(
        output,
        "Enter feedback for each guess: g = green, y = yellow, x = grey (e.g. xygxx)."
    )?;

    loop {
        let Some(guess) = game.next_guess() else {
            writeln!(output, "{}", "all out of guesses...".red())?;
            return Ok(PlayOutcome::Exhausted);
        };

        writeln!(output, "{}", guess.as_str().bright_white().bold())?;

        let Some(feedback) = wait_for_response(&mut input, &mut output)? else {
            info!("session ended on turn {}", game.turn());
            return Ok(PlayOutcome::Quit);
        };

        let turn = game.turn();
        if game.record(feedback)? == Outcome::Solved {
            writeln!(output, "{}", "We did it!".green().bold())?;
            return Ok(PlayOutcome::Solved(turn));
        }
    }
}

/// Prompt until a well-formed feedback string arrives
///
/// Returns `None` on end of input or when the user types `quit`.
fn wait_for_response<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<Feedback>> {
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read feedback")?;
        if read == 0 {
            return Ok(None);
        }

        let response = line.trim();
        if matches!(response, "quit" | "q" | "exit") {
            return Ok(None);
        }

        match Feedback::parse(response) {
            Ok(feedback) => return Ok(Some(feedback)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Run interactive play on the process's stdin and stdout
///
/// # Errors
///
/// Returns an error if terminal I/O fails or the dictionary is empty.
pub fn run_play_stdio(words: &[Word]) -> Result<PlayOutcome> {
    if words.is_empty() {
        bail!("the dictionary is empty");
    }

    let stdin = std::io::stdin();
    run_play(words, stdin.lock(), std::io::stdout())
}
