//! Word solving command
//!
//! Plays a full game against a known target word, acting as the host.

use crate::core::Word;
use crate::solver::{Outcome, Solver, SolverConfig};
use crate::wordlists::WordData;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_wrong: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_wrong: 6,
        }
    }

    #[must_use]
    pub const fn with_max_wrong(mut self, max_wrong: usize) -> Self {
        self.max_wrong = max_wrong;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub target: String,
    pub steps: Vec<GuessStep>,
    pub wrong_guesses: usize,
}

impl SolveResult {
    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess step in the game
pub struct GuessStep {
    pub letter: char,
    pub hit: bool,
    pub board_after: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` with a fresh solver over `data`
///
/// The host reveals every position of a correctly guessed letter. The game
/// stops once the board is complete or wrong guesses reach
/// `config.max_wrong`.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word or not in the dictionary
/// - The solver hits a fatal condition (no candidates, no predictions left)
pub fn solve_word(
    config: SolveConfig,
    data: &WordData,
    solver_config: SolverConfig,
) -> Result<SolveResult, String> {
    let target =
        Word::new(config.target.as_str()).map_err(|e| format!("Invalid target word: {e}"))?;
    if !data.dictionary.contains(&target) {
        return Err(format!("'{target}' is not in the dictionary"));
    }

    let mut solver = Solver::new(
        solver_config,
        target.len(),
        &data.dictionary,
        &data.fragments,
        data.popularity.clone(),
    )
    .map_err(|e| e.to_string())?;

    let mut steps = Vec::new();

    while !solver.is_solved() && solver.wrong_guesses() < config.max_wrong {
        let guess = solver.next_guess().map_err(|e| e.to_string())?;
        let (candidates_before, candidates_after) = solver
            .last_round()
            .map_or((0, solver.candidates().len()), |r| {
                (r.candidates_before, r.candidates_after)
            });

        let revealed = solver.board().reveal(&target, guess.letter as u8);
        let update = solver
            .board()
            .apply_update(revealed.text())
            .map_err(|e| e.to_string())?;
        let outcome = solver.record(guess, update).map_err(|e| e.to_string())?;

        steps.push(GuessStep {
            letter: guess.letter,
            hit: outcome == Outcome::Hit,
            board_after: solver.board().text().to_string(),
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        success: solver.is_solved(),
        target: target.text().to_string(),
        steps,
        wrong_guesses: solver.wrong_guesses(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::sample::{self, FIVE_LETTER_WORDS};

    fn solve(target: &str, max_wrong: usize) -> Result<SolveResult, String> {
        solve_word(
            SolveConfig::new(target.to_string()).with_max_wrong(max_wrong),
            &sample::data(),
            SolverConfig::default(),
        )
    }

    #[test]
    fn solve_word_succeeds() {
        let result = solve("ample", 26).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "ample");
        assert_eq!(result.steps.last().unwrap().board_after, "ample");
        assert_eq!(
            result.steps.iter().filter(|s| !s.hit).count(),
            result.wrong_guesses
        );
    }

    #[test]
    fn every_dictionary_word_is_solved() {
        let failures: Vec<String> = FIVE_LETTER_WORDS
            .iter()
            .filter_map(|&word| match solve(word, 26) {
                Ok(result) if result.success => None,
                Ok(_) => Some(format!("{word}: hanged")),
                Err(e) => Some(format!("{word}: {e}")),
            })
            .collect();

        assert!(failures.is_empty(), "{failures:?}");
    }

    #[test]
    fn solve_records_history() {
        let result = solve("golly", 26).unwrap();

        assert!(result.success);
        assert_eq!(result.total_guesses(), result.steps.len());

        // candidate lists only ever shrink
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.steps.windows(2) {
            assert!(pair[1].candidates_before <= pair[0].candidates_after);
        }

        // every hit reveals more of the word
        let mut resolved = 0;
        for step in &result.steps {
            let now = step.board_after.bytes().filter(|&b| b != b'-').count();
            if step.hit {
                assert!(now > resolved);
            } else {
                assert_eq!(now, resolved);
            }
            resolved = now;
        }
    }

    #[test]
    fn solve_respects_wrong_guess_limit() {
        let result = solve("hello", 0).unwrap();

        assert!(!result.success);
        assert!(result.steps.is_empty());

        let result = solve("puppy", 2).unwrap();
        assert!(result.wrong_guesses <= 2);
        assert!(result.success || result.wrong_guesses == 2);
    }

    #[test]
    fn solve_rejects_unknown_or_invalid_target() {
        assert!(solve("zzzzz", 6).is_err());
        assert!(solve("c4t", 6).is_err());
    }
}
