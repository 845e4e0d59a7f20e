//! Main hangman solver interface

use super::scorer::{self, RoundStats};
use super::{SolverConfig, SolverError, generators, selector};
use crate::core::{Board, BoardUpdate, Fragment, Popularity, Word};
use crate::prediction::{PredictionId, Registry};
use log::info;

/// A single-letter guess proposed by the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub id: PredictionId,
    pub letter: char,
}

/// How the host answered a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// Main hangman solver
///
/// Owns the prediction graph, the live board and the shrinking candidate
/// list for one game.
pub struct Solver {
    config: SolverConfig,
    registry: Registry,
    board: Board,
    candidates: Vec<Word>,
    popularity: Popularity,
    guesses: usize,
    wrong_guesses: usize,
    last_round: Option<RoundStats>,
}

impl Solver {
    /// Start a game for a hidden word of `length` letters
    ///
    /// Keeps only dictionary words of that length and seeds the registry with
    /// the default letter and fragment predictions.
    ///
    /// # Errors
    /// Returns `SolverError::ZeroLength` or `SolverError::NoCandidates`.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::{Popularity, Word};
    /// use hangman_ai::solver::{Solver, SolverConfig};
    ///
    /// let dictionary: Vec<Word> = ["cat", "car", "can", "horse"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut solver =
    ///     Solver::new(SolverConfig::default(), 3, &dictionary, &[], Popularity::uniform()).unwrap();
    ///
    /// let guess = solver.next_guess().unwrap();
    /// assert!(guess.letter == 'a' || guess.letter == 'c');
    /// ```
    pub fn new(
        config: SolverConfig,
        length: usize,
        dictionary: &[Word],
        fragments: &[Fragment],
        popularity: Popularity,
    ) -> Result<Self, SolverError> {
        if length == 0 {
            return Err(SolverError::ZeroLength);
        }

        let candidates: Vec<Word> = dictionary
            .iter()
            .filter(|w| w.len() == length)
            .cloned()
            .collect();
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates { length });
        }

        let mut registry = Registry::new();
        generators::seed_defaults(&mut registry, fragments);

        Ok(Self {
            config,
            registry,
            board: Board::blank(length),
            candidates,
            popularity,
            guesses: 0,
            wrong_guesses: 0,
            last_round: None,
        })
    }

    /// Run one round: generate, score, select
    ///
    /// # Errors
    /// Returns `SolverError` if no candidate survives filtering, no
    /// prediction remains, or the selected prediction is not a single letter.
    pub fn next_guess(&mut self) -> Result<Guess, SolverError> {
        generators::generate_all(
            &mut self.registry,
            &self.board,
            &self.candidates,
            &self.config,
        );
        let stats = scorer::score_round(
            &mut self.registry,
            &self.board,
            &mut self.candidates,
            &self.popularity,
            &self.config,
        )?;
        self.last_round = Some(stats);

        let id = selector::best_guess(&self.registry)?;
        let kind = self.registry.get(id).kind();
        let letter = kind
            .as_letter()
            .ok_or_else(|| SolverError::NonFoundationalGuess(kind.to_string()))?;

        info!(
            "board {} | {} candidates | {} active / {} registered | guess '{letter}'",
            self.board,
            self.candidates.len(),
            self.registry.active().len(),
            self.registry.len()
        );
        Ok(Guess { id, letter })
    }

    /// Apply the host's answer to `guess`
    ///
    /// A miss locks the guess (and everything depending on it) as invalid;
    /// a hit locks it as certain and adopts the new board.
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentBoard` if a revealed board does not
    /// extend the current one.
    pub fn record(&mut self, guess: Guess, update: BoardUpdate) -> Result<Outcome, SolverError> {
        // re-validate boards built outside `Board::apply_update`
        let update = match update {
            BoardUpdate::Revealed(next) => self
                .board
                .apply_update(next.text())
                .map_err(SolverError::InconsistentBoard)?,
            BoardUpdate::Unchanged => BoardUpdate::Unchanged,
        };

        self.guesses += 1;
        match update {
            BoardUpdate::Unchanged => {
                self.registry.mark_invalid(guess.id);
                self.wrong_guesses += 1;
                Ok(Outcome::Miss)
            }
            BoardUpdate::Revealed(next) => {
                self.registry.mark_certain(guess.id);
                self.board = next;
                Ok(Outcome::Hit)
            }
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Words still consistent with everything learned so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    /// Statistics of the most recent scoring round
    #[must_use]
    pub const fn last_round(&self) -> Option<&RoundStats> {
        self.last_round.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::PredictionKind;

    fn dictionary() -> Vec<Word> {
        ["cat", "car", "can", "cot", "dog", "ox", "horse"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    fn solver() -> Solver {
        Solver::new(
            SolverConfig::default(),
            3,
            &dictionary(),
            &[],
            Popularity::uniform(),
        )
        .unwrap()
    }

    #[test]
    fn new_keeps_words_of_requested_length() {
        let s = solver();
        assert_eq!(s.candidates().len(), 5);
        assert_eq!(s.board().text(), "---");
        assert_eq!(s.registry().len(), 26);
    }

    #[test]
    fn new_rejects_impossible_lengths() {
        let dict = dictionary();
        assert_eq!(
            Solver::new(SolverConfig::default(), 0, &dict, &[], Popularity::uniform()).err(),
            Some(SolverError::ZeroLength)
        );
        assert_eq!(
            Solver::new(SolverConfig::default(), 9, &dict, &[], Popularity::uniform()).err(),
            Some(SolverError::NoCandidates { length: 9 })
        );
    }

    #[test]
    fn first_guess_is_a_common_letter() {
        let dict: Vec<Word> = ["cat", "car", "can"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let mut s =
            Solver::new(SolverConfig::default(), 3, &dict, &[], Popularity::uniform()).unwrap();

        let guess = s.next_guess().unwrap();
        // 'a' and 'c' tie; the alphabetical tie-break picks 'a'
        assert_eq!(guess.letter, 'a');
        assert_eq!(
            s.registry().get(guess.id).kind(),
            &PredictionKind::contains("a")
        );
    }

    #[test]
    fn hit_resolves_letter_positions() {
        let mut s = solver();
        let guess = s.next_guess().unwrap();
        let target = Word::new("cat").unwrap();
        let letter = guess.letter as u8;

        // drive the board by hand so the test doesn't depend on which letter came first
        let revealed = s.board().reveal(&target, letter);
        let update = s.board().apply_update(revealed.text()).unwrap();
        let outcome = s.record(guess, update).unwrap();

        if target.has_letter(letter) {
            assert_eq!(outcome, Outcome::Hit);
            assert!(s.registry().get(guess.id).is_certain());
        } else {
            assert_eq!(outcome, Outcome::Miss);
            assert!(s.registry().get(guess.id).is_invalid());
        }
        assert_eq!(s.guesses(), 1);
    }

    #[test]
    fn c_t_board_creates_certain_exclusion() {
        let mut s = solver();
        let c = s.registry().find(&PredictionKind::contains("c")).unwrap();
        let t = s.registry().find(&PredictionKind::contains("t")).unwrap();

        s.record(
            Guess { id: c, letter: 'c' },
            BoardUpdate::Revealed(Board::parse("c--").unwrap()),
        )
        .unwrap();
        s.record(
            Guess { id: t, letter: 't' },
            BoardUpdate::Revealed(Board::parse("c-t").unwrap()),
        )
        .unwrap();

        let guess = s.next_guess().unwrap();

        let not_c = s
            .registry()
            .find(&PredictionKind::Not {
                letter: b'c',
                mask: vec![true, false, false],
            })
            .unwrap();
        assert!(s.registry().get(not_c).is_certain());

        let left: Vec<&str> = s.candidates().iter().map(Word::text).collect();
        assert_eq!(left, vec!["cat", "cot"]);
        assert!(guess.letter == 'a' || guess.letter == 'o');
    }

    #[test]
    fn miss_invalidates_dependents() {
        let mut s = solver();
        s.next_guess().unwrap();
        let r = s.registry().find(&PredictionKind::contains("r")).unwrap();

        let outcome = s
            .record(Guess { id: r, letter: 'r' }, BoardUpdate::Unchanged)
            .unwrap();

        assert_eq!(outcome, Outcome::Miss);
        assert_eq!(s.wrong_guesses(), 1);
        for &child in s.registry().get(r).children() {
            assert!(s.registry().get(child).is_invalid());
        }

        s.next_guess().unwrap();
        assert!(s.candidates().iter().all(|w| !w.has_letter(b'r')));
    }

    #[test]
    fn record_rejects_inconsistent_board() {
        let mut s = solver();
        let guess = s.next_guess().unwrap();
        let result = s.record(guess, BoardUpdate::Revealed(Board::parse("ca").unwrap()));
        assert!(matches!(result, Err(SolverError::InconsistentBoard(_))));
        assert_eq!(s.guesses(), 0);
    }

    #[test]
    fn unsatisfiable_board_is_fatal() {
        let mut s = solver();
        let z = s.registry().find(&PredictionKind::contains("z")).unwrap();
        s.record(
            Guess { id: z, letter: 'z' },
            BoardUpdate::Revealed(Board::parse("z--").unwrap()),
        )
        .unwrap();

        assert!(matches!(
            s.next_guess(),
            Err(SolverError::CandidatesExhausted { .. })
        ));
    }
}
