//! Prediction generators
//!
//! Each round, before scoring, these propose new predictions (or refresh
//! existing ones) through the registry's dedup factory.

use super::SolverConfig;
use crate::core::{Board, Fragment, Word};
use crate::prediction::{PredictionId, PredictionKind, Registry};
use log::trace;

/// Seed a fresh registry with one `Contains` per letter and one `UsesBit`
/// per known fragment
pub fn seed_defaults(registry: &mut Registry, fragments: &[Fragment]) {
    for letter in 'a'..='z' {
        registry.make(PredictionKind::contains(letter));
    }
    for fragment in fragments {
        registry.make(PredictionKind::UsesBit(fragment.clone()));
    }
}

/// Run every generator in order: letter exclusion, segment extension,
/// board snapshot
pub fn generate_all(
    registry: &mut Registry,
    board: &Board,
    candidates: &[Word],
    config: &SolverConfig,
) {
    fixed_letter_exclusion(registry, board);
    segment_extension(registry, candidates, config);
    current_board(registry, board);
}

/// For every letter on the board, a certain `Not` prediction pinning it to
/// exactly the positions it occupies
pub fn fixed_letter_exclusion(registry: &mut Registry, board: &Board) -> Vec<PredictionId> {
    board
        .letters()
        .into_iter()
        .map(|letter| {
            let id = registry.make(PredictionKind::Not {
                letter,
                mask: board.mask_for(letter),
            });
            registry.mark_certain(id);
            id
        })
        .collect()
}

/// Extend every open `Contains` segment by the letters that most often
/// follow it in the remaining candidates
///
/// Returns the number of extensions proposed (including ones that deduped
/// onto existing predictions).
pub fn segment_extension(
    registry: &mut Registry,
    candidates: &[Word],
    config: &SolverConfig,
) -> usize {
    let open_segments: Vec<String> = registry
        .active()
        .iter()
        .map(|&id| registry.get(id))
        .filter(|p| p.is_open())
        .filter_map(|p| match p.kind() {
            PredictionKind::Contains { segment } if segment.len() < config.max_segment_len => {
                Some(segment.clone())
            }
            _ => None,
        })
        .collect();

    let mut proposed = 0;
    for segment in open_segments {
        for letter in top_followers(&segment, candidates, config.extension_depth) {
            let extended = format!("{segment}{}", letter as char);
            trace!("extending '{segment}' to '{extended}'");
            registry.make(PredictionKind::contains(extended));
            proposed += 1;
        }
    }
    proposed
}

/// Certain snapshot of the live board
pub fn current_board(registry: &mut Registry, board: &Board) -> PredictionId {
    let id = registry.make(PredictionKind::holemap(board.text()));
    registry.mark_certain(id);
    id
}

/// Count of each letter directly after an occurrence of `segment`
fn follower_histogram(segment: &str, candidates: &[Word]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    let needle = segment.as_bytes();

    for word in candidates {
        for window in word.text().as_bytes().windows(needle.len() + 1) {
            if window.starts_with(needle) {
                counts[usize::from(window[needle.len()] - b'a')] += 1;
            }
        }
    }

    counts
}

/// Up to `depth` most frequent followers, most frequent first,
/// alphabetical among equals
fn top_followers(segment: &str, candidates: &[Word], depth: usize) -> Vec<u8> {
    let counts = follower_histogram(segment, candidates);
    let mut ranked: Vec<(usize, u8)> = (b'a'..=b'z')
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(letter, count)| (count, letter))
        .collect();

    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    ranked.into_iter().take(depth).map(|(_, letter)| letter).collect()
}
