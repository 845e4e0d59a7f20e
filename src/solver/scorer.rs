//! Constraint filtering and popularity-weighted scoring
//!
//! One scoring round is three passes over the active predictions:
//! 1. Certainty resolution against the board (sequential, mutates flags)
//! 2. Candidate filtering (parallel over words, read-only)
//! 3. Weight accumulation (parallel sum-reduction, read-only)
//!
//! Predictions are never mutated inside the parallel passes; weights are
//! written back and zero-weight predictions pruned only afterwards.

use super::{SolverConfig, SolverError};
use crate::core::{Board, Popularity, Word};
use crate::prediction::{PredictionId, PredictionKind, Registry};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

/// What a scoring round did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub marked_certain: usize,
    pub marked_invalid: usize,
    pub scored: usize,
    pub pruned: usize,
}

/// Outcome of certainty resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub certain: usize,
    pub invalid: usize,
}

/// Immutable view of one active prediction for the parallel passes
struct Constraint<'a> {
    kind: &'a PredictionKind,
    certain: bool,
    invalid: bool,
    importance: f64,
}

impl Constraint<'_> {
    /// A word is admissible unless it satisfies an invalid prediction or
    /// fails a certain one
    #[inline]
    fn admits(&self, word: &str) -> bool {
        let valid = self.kind.valid_for(word);
        !(valid && self.invalid) && (valid || !self.certain)
    }
}

fn snapshot<'a>(registry: &'a Registry, ids: &[PredictionId]) -> Vec<Constraint<'a>> {
    ids.iter()
        .map(|&id| {
            let p = registry.get(id);
            Constraint {
                kind: p.kind(),
                certain: p.is_certain(),
                invalid: p.is_invalid(),
                importance: p.kind().importance(),
            }
        })
        .collect()
}

fn pass_bar(len: usize, label: &'static str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:>5} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    bar.set_prefix(label);
    bar
}

/// Lock predictions the board already proves, and invalidate predictions
/// whose foundations are all resolved yet still fail against the board
///
/// Invalidation here flags only the failing prediction itself. Its
/// dependents include board-derived `Not` predictions, which must stay
/// certain.
pub fn resolve_certainty(
    registry: &mut Registry,
    board: &Board,
    has_candidates: bool,
) -> Resolution {
    let mut resolution = Resolution::default();

    for id in registry.active().to_vec() {
        let prediction = registry.get(id);
        if !prediction.is_open() {
            continue;
        }

        if prediction.kind().valid_for(board.text()) {
            registry.mark_certain(id);
            resolution.certain += 1;
        } else if has_candidates {
            let grounded = registry.topmost(id).into_iter().all(|top| {
                let top = registry.get(top);
                top.is_certain() && !top.is_invalid()
            });
            if grounded && registry.flag_invalid(id) {
                resolution.invalid += 1;
            }
        }
    }

    debug!(
        "certainty resolution: {} certain, {} invalid",
        resolution.certain, resolution.invalid
    );
    resolution
}

/// Keep the words every active prediction admits, in their original order
fn filter_words(constraints: &[Constraint<'_>], words: &[Word], visible: bool) -> Vec<Word> {
    let bar = pass_bar(words.len(), "WVC", visible);
    let kept = words
        .par_iter()
        .progress_with(bar.clone())
        .filter(|word| constraints.iter().all(|c| c.admits(word.text())))
        .cloned()
        .collect();
    bar.finish_and_clear();
    kept
}

/// Popularity-weighted match totals per prediction
///
/// `scores[j] = Σ popularity(word) × importance(j)` over words valid for `j`.
fn accumulate_scores(
    constraints: &[Constraint<'_>],
    words: &[Word],
    popularity: &Popularity,
    visible: bool,
) -> Vec<f64> {
    let n = constraints.len();
    let bar = pass_bar(words.len(), "WVC2", visible);
    let scores = words
        .par_iter()
        .progress_with(bar.clone())
        .fold(
            || vec![0.0; n],
            |mut acc, word| {
                let pop = popularity.get(word.text());
                for (slot, c) in acc.iter_mut().zip(constraints) {
                    if c.kind.valid_for(word.text()) {
                        *slot += pop * c.importance;
                    }
                }
                acc
            },
        )
        .reduce(
            || vec![0.0; n],
            |mut total, partial| {
                for (t, p) in total.iter_mut().zip(partial) {
                    *t += p;
                }
                total
            },
        );
    bar.finish_and_clear();
    scores
}

/// Run a full scoring round, shrinking `candidates` in place
///
/// Each active prediction's weight becomes
/// `(score / |candidates|) × importance`, so importance counts twice.
///
/// # Errors
/// Returns `SolverError::CandidatesExhausted` if no candidate survives
/// filtering. `candidates` is left untouched in that case.
pub fn score_round(
    registry: &mut Registry,
    board: &Board,
    candidates: &mut Vec<Word>,
    popularity: &Popularity,
    config: &SolverConfig,
) -> Result<RoundStats, SolverError> {
    let candidates_before = candidates.len();
    let resolution = resolve_certainty(registry, board, !candidates.is_empty());

    let ids = registry.active().to_vec();
    let (survivors, scores) = {
        let constraints = snapshot(registry, &ids);
        let survivors = filter_words(&constraints, candidates, config.show_progress);
        if survivors.is_empty() {
            return Err(SolverError::CandidatesExhausted {
                constraints: ids.len(),
            });
        }
        let scores =
            accumulate_scores(&constraints, &survivors, popularity, config.show_progress);
        (survivors, scores)
    };
    *candidates = survivors;

    let total = candidates.len() as f64;
    for (&id, score) in ids.iter().zip(scores) {
        let importance = registry.get(id).kind().importance();
        registry.set_weight(id, (score / total) * importance);
    }
    let pruned = registry.prune_zero_weight();

    let stats = RoundStats {
        candidates_before,
        candidates_after: candidates.len(),
        marked_certain: resolution.certain,
        marked_invalid: resolution.invalid,
        scored: ids.len(),
        pruned,
    };
    info!(
        "scored {} predictions, candidates {} -> {}, pruned {}",
        stats.scored, stats.candidates_before, stats.candidates_after, stats.pruned
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::generators::{current_board, fixed_letter_exclusion, seed_defaults};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn weight_of(registry: &Registry, kind: &PredictionKind) -> f64 {
        registry.get(registry.find(kind).unwrap()).weight()
    }

    #[test]
    fn board_valid_predictions_become_certain() {
        let mut registry = Registry::new();
        let c = registry.make(PredictionKind::contains("c"));
        let a = registry.make(PredictionKind::contains("a"));
        let board = Board::parse("c--").unwrap();

        let resolution = resolve_certainty(&mut registry, &board, true);

        assert_eq!(resolution.certain, 1);
        assert!(registry.get(c).is_certain());
        assert!(registry.get(a).is_open());
    }

    #[test]
    fn grounded_failures_become_invalid() {
        let mut registry = Registry::new();
        seed_defaults(&mut registry, &[]);
        let ct = registry.make(PredictionKind::contains("ct"));
        let ca = registry.make(PredictionKind::contains("ca"));
        let board = Board::parse("c-t").unwrap();

        resolve_certainty(&mut registry, &board, true);

        // both foundations of "ct" are on the board, but "ct" is not
        assert!(registry.get(ct).is_invalid());
        // "a" is still unresolved, so "ca" stays open
        assert!(registry.get(ca).is_open());
    }

    #[test]
    fn grounded_failure_keeps_board_exclusions_certain() {
        let mut registry = Registry::new();
        seed_defaults(&mut registry, &[]);
        let ll = registry.make(PredictionKind::contains("ll"));
        let lly = registry.make(PredictionKind::contains("lly"));
        let board = Board::parse("---l-").unwrap();
        let exclusions = fixed_letter_exclusion(&mut registry, &board);
        let not_l = exclusions[0];

        let resolution = resolve_certainty(&mut registry, &board, true);

        // "l" is resolved and "ll" is not on the board
        assert!(registry.get(ll).is_invalid());
        assert_eq!(resolution.invalid, 1);
        assert!(registry.get(lly).is_open());
        assert!(registry.get(not_l).is_certain());

        let mut candidates = words(&["ample", "apple", "lapel", "hello"]);
        score_round(
            &mut registry,
            &board,
            &mut candidates,
            &Popularity::uniform(),
            &SolverConfig::default(),
        )
        .unwrap();
        let left: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(left, vec!["ample", "apple"]);
    }

    #[test]
    fn no_invalidation_without_candidates() {
        let mut registry = Registry::new();
        seed_defaults(&mut registry, &[]);
        let ct = registry.make(PredictionKind::contains("ct"));
        let board = Board::parse("c-t").unwrap();

        resolve_certainty(&mut registry, &board, false);
        assert!(registry.get(ct).is_open());
    }

    #[test]
    fn filter_drops_words_matching_invalid_or_missing_certain() {
        let mut registry = Registry::new();
        let c = registry.make(PredictionKind::contains("c"));
        let r = registry.make(PredictionKind::contains("r"));
        let o = registry.make(PredictionKind::contains("o"));
        registry.mark_certain(c);
        registry.mark_invalid(r);

        let ids = vec![c, r, o];
        let constraints = snapshot(&registry, &ids);
        let kept = filter_words(&constraints, &words(&["cat", "car", "dot", "cot"]), false);

        let kept: Vec<&str> = kept.iter().map(Word::text).collect();
        assert_eq!(kept, vec!["cat", "cot"]);
    }

    #[test]
    fn uniform_three_word_scenario_weights() {
        let mut registry = Registry::new();
        seed_defaults(&mut registry, &[]);
        let board = Board::blank(3);
        current_board(&mut registry, &board);
        let mut candidates = words(&["cat", "car", "can"]);

        let stats = score_round(
            &mut registry,
            &board,
            &mut candidates,
            &Popularity::uniform(),
            &SolverConfig::default(),
        )
        .unwrap();

        assert_eq!(stats.candidates_after, 3);
        let a = weight_of(&registry, &PredictionKind::contains("a"));
        let c = weight_of(&registry, &PredictionKind::contains("c"));
        let t = weight_of(&registry, &PredictionKind::contains("t"));
        // 3/3 matches: (3 × 0.2 / 3) × 0.2
        assert!((a - 0.04).abs() < 1e-9);
        assert!((a - c).abs() < f64::EPSILON);
        // 1/3 matches: (1 × 0.2 / 3) × 0.2
        assert!((t - 0.04 / 3.0).abs() < 1e-9);
        assert!(a > t);

        // letters that never occur score zero and leave the active list
        let z = registry.find(&PredictionKind::contains("z")).unwrap();
        assert!(!registry.active().contains(&z));
        assert_eq!(stats.pruned, 21);
    }

    #[test]
    fn popularity_shifts_weights() {
        let mut registry = Registry::new();
        seed_defaults(&mut registry, &[]);
        let board = Board::blank(3);
        let mut candidates = words(&["cat", "car", "can"]);
        let popularity = Popularity::from_pairs([("car".to_string(), 10.0), ("cat".to_string(), 1.0)]);

        score_round(
            &mut registry,
            &board,
            &mut candidates,
            &popularity,
            &SolverConfig::default(),
        )
        .unwrap();

        let r = weight_of(&registry, &PredictionKind::contains("r"));
        let t = weight_of(&registry, &PredictionKind::contains("t"));
        let n = weight_of(&registry, &PredictionKind::contains("n"));
        assert!(r > t);
        // "can" is unlisted and falls back to the minimum weight
        assert!((t - n).abs() < f64::EPSILON);
    }

    #[test]
    fn filtering_is_monotone_across_rounds() {
        let mut registry = Registry::new();
        seed_defaults(&mut registry, &[]);
        let mut candidates = words(&["cat", "car", "can", "cot", "dog", "dig"]);
        let popularity = Popularity::uniform();
        let config = SolverConfig::default();

        let mut sizes = vec![candidates.len()];
        for next in ["---", "c--", "c-t"] {
            let board = Board::parse(next).unwrap();
            fixed_letter_exclusion(&mut registry, &board);
            current_board(&mut registry, &board);
            score_round(&mut registry, &board, &mut candidates, &popularity, &config).unwrap();
            sizes.push(candidates.len());
        }

        assert!(sizes.windows(2).all(|pair| pair[1] <= pair[0]));
        let left: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(left, vec!["cat", "cot"]);
    }

    #[test]
    fn empty_filter_result_is_an_error() {
        let mut registry = Registry::new();
        let q = registry.make(PredictionKind::contains("q"));
        registry.mark_certain(q);
        let mut candidates = words(&["cat", "dog"]);

        let result = score_round(
            &mut registry,
            &Board::blank(3),
            &mut candidates,
            &Popularity::uniform(),
            &SolverConfig::default(),
        );

        assert_eq!(
            result,
            Err(SolverError::CandidatesExhausted { constraints: 1 })
        );
        assert_eq!(candidates.len(), 2);
    }
}
