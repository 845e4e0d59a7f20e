//! Word data loading utilities
//!
//! Flat-file readers for the dictionary, fragment and popularity files.

use crate::core::{Fragment, Popularity, Word};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary words from a file, one per line
///
/// Blank lines, hyphenated entries and anything that is not a plain ASCII
/// word are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_ai::wordlists::loader::load_words;
///
/// let words = load_words("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.contains('-') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load `+prefix` / `-suffix` fragments, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or
/// `io::ErrorKind::InvalidData` for a line without a valid anchor marker or
/// with anything other than `a-z` after it.
pub fn load_fragments<P: AsRef<Path>>(path: P) -> io::Result<Vec<Fragment>> {
    let content = fs::read_to_string(path)?;
    parse_fragments(&content)
}

fn parse_fragments(content: &str) -> io::Result<Vec<Fragment>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Fragment>().map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {e}", i + 1))
            })
        })
        .collect()
}

/// Load `word weight` pairs, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or
/// `io::ErrorKind::InvalidData` for a line whose weight is missing, not a
/// number, or not a finite positive value.
pub fn load_popularity<P: AsRef<Path>>(path: P) -> io::Result<Popularity> {
    let content = fs::read_to_string(path)?;
    parse_popularity(&content)
}

fn parse_popularity(content: &str) -> io::Result<Popularity> {
    let mut pairs = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let weight = fields
            .next()
            .and_then(|w| w.parse::<f64>().ok())
            .filter(|w| w.is_finite() && *w > 0.0)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: expected '<word> <positive weight>'", i + 1),
                )
            })?;
        pairs.push((word.to_lowercase(), weight));
    }

    Ok(Popularity::from_pairs(pairs))
}

/// Shortest and longest derived fragment
const MIN_FRAGMENT_LEN: usize = 2;
const MAX_FRAGMENT_LEN: usize = 4;
/// Only words at least this long contribute fragments
const MIN_SOURCE_LEN: usize = 7;
/// Share of the whole dictionary a fragment must reach to be kept
const MIN_FRAGMENT_SHARE: f64 = 0.0025;

/// Derive common prefixes and suffixes from the dictionary itself
///
/// Every word of at least seven letters contributes its 2-4 letter heads as
/// prefixes and its 2-4 letter tails as suffixes. A fragment is kept when
/// the words carrying it make up at least 0.25% of the dictionary. The result
/// is sorted, prefixes first.
///
/// # Examples
/// ```
/// use hangman_ai::core::Fragment;
/// use hangman_ai::wordlists::loader::{derive_fragments, words_from_slice};
///
/// let dictionary = words_from_slice(&["running", "singing", "cat"]);
/// let fragments = derive_fragments(&dictionary);
/// assert!(fragments.contains(&Fragment::suffix("ing")));
/// ```
#[must_use]
pub fn derive_fragments(dictionary: &[Word]) -> Vec<Fragment> {
    let total = dictionary.len() as f64;
    let mut counts: BTreeMap<Fragment, usize> = BTreeMap::new();

    for word in dictionary.iter().filter(|w| w.len() >= MIN_SOURCE_LEN) {
        let text = word.text();
        for n in MIN_FRAGMENT_LEN..=MAX_FRAGMENT_LEN {
            *counts.entry(Fragment::prefix(&text[..n])).or_insert(0) += 1;
            *counts
                .entry(Fragment::suffix(&text[text.len() - n..]))
                .or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count as f64 / total >= MIN_FRAGMENT_SHARE)
        .map(|(fragment, _)| fragment)
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
