//! Interactive hangman session
//!
//! The user hosts the game: the solver guesses letters and the user types
//! back the board after each guess.

use crate::core::HOLE;
use crate::output::formatters::spaced_board;
use crate::solver::{Solver, SolverConfig};
use crate::wordlists::WordData;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    pub word: String,
    pub guesses: usize,
    pub wrong_guesses: usize,
    /// False when the user quit before the board was complete
    pub completed: bool,
}

/// Run the interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on an I/O failure, closed input, or a fatal solver
/// condition.
pub fn run_play(
    data: &WordData,
    config: SolverConfig,
    length: Option<usize>,
) -> Result<Option<PlaySummary>, String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(&mut stdin.lock(), &mut stdout.lock(), data, config, length)
}

/// Play one game reading board states from `input`
///
/// Returns `Ok(None)` if the user quit before choosing a length.
///
/// # Errors
///
/// Returns an error on an I/O failure, closed input, or a fatal solver
/// condition.
pub fn play_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    data: &WordData,
    config: SolverConfig,
    length: Option<usize>,
) -> Result<Option<PlaySummary>, String> {
    writeln!(out, "{}", "HangmanAI v2.0".bright_cyan().bold()).map_err(|e| e.to_string())?;
    writeln!(
        out,
        "After each guess type the board with '-' for unknown letters; \
         press enter if the letter is not in the word. 'quit' exits.\n"
    )
    .map_err(|e| e.to_string())?;

    let length = match length {
        Some(n) => n,
        None => match read_length(input, out, data)? {
            Some(n) => n,
            None => return Ok(None),
        },
    };

    let mut solver = Solver::new(
        config,
        length,
        &data.dictionary,
        &data.fragments,
        data.popularity.clone(),
    )
    .map_err(|e| e.to_string())?;

    while !solver.is_solved() {
        let guess = solver.next_guess().map_err(|e| e.to_string())?;

        writeln!(
            out,
            "\n{}   ({} candidates, {} wrong)",
            spaced_board(solver.board().text()),
            solver.candidates().len(),
            solver.wrong_guesses()
        )
        .map_err(|e| e.to_string())?;
        writeln!(
            out,
            "Guess: {}",
            guess.letter.to_ascii_uppercase().to_string().bright_yellow().bold()
        )
        .map_err(|e| e.to_string())?;

        let update = loop {
            let Some(line) = prompt(input, out, "Board")? else {
                return Err("Input closed before the word was found".to_string());
            };
            if line.eq_ignore_ascii_case("quit") {
                return Ok(Some(summary(&solver, false)));
            }
            match solver.board().apply_update(&line) {
                Ok(update) => break update,
                Err(e) => writeln!(out, "{} {e}", "✗".red()).map_err(|e| e.to_string())?,
            }
        };

        solver.record(guess, update).map_err(|e| e.to_string())?;
    }

    let result = summary(&solver, true);
    writeln!(out, "\nWord is: {}", result.word.bright_green().bold())
        .map_err(|e| e.to_string())?;
    writeln!(out, "Total guesses: {}", result.guesses).map_err(|e| e.to_string())?;
    writeln!(out, "Wrong guesses: {}", result.wrong_guesses).map_err(|e| e.to_string())?;

    Ok(Some(result))
}

fn summary(solver: &Solver, completed: bool) -> PlaySummary {
    PlaySummary {
        word: solver.board().text().to_string(),
        guesses: solver.guesses(),
        wrong_guesses: solver.wrong_guesses(),
        completed,
    }
}

/// Ask for the word length until a positive number or `quit` arrives
fn read_length<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    data: &WordData,
) -> Result<Option<usize>, String> {
    loop {
        let Some(line) = prompt(input, out, "How many dashes?")? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        // accept either a number or the dashes themselves
        let parsed = if !line.is_empty() && line.bytes().all(|b| b == HOLE) {
            Some(line.len())
        } else {
            line.parse::<usize>().ok().filter(|&n| n > 0)
        };
        match parsed {
            Some(n) if !data.words_of_length(n).is_empty() => return Ok(Some(n)),
            Some(n) => writeln!(out, "No dictionary words have {n} letters")
                .map_err(|e| e.to_string())?,
            None => writeln!(out, "Please enter a positive number").map_err(|e| e.to_string())?,
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, String> {
    write!(out, "{label}: ").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
