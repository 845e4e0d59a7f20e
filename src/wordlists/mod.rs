//! Word data for hangman solving
//!
//! The solver consumes three data sets: the dictionary, the prefix/suffix
//! fragments and the popularity table. `WordData` bundles them.

pub mod loader;

use crate::core::{Fragment, Popularity, Word};
use log::debug;
use std::io;
use std::path::Path;

/// Everything a game needs besides the board
#[derive(Debug, Clone, Default)]
pub struct WordData {
    pub dictionary: Vec<Word>,
    pub fragments: Vec<Fragment>,
    pub popularity: Popularity,
}

impl WordData {
    /// Load the dictionary and, when given, fragments and popularity
    ///
    /// Without a fragment file the fragments are derived from the dictionary.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file cannot be read or is malformed.
    pub fn load(
        words: &Path,
        fragments: Option<&Path>,
        popularity: Option<&Path>,
    ) -> io::Result<Self> {
        let dictionary = loader::load_words(words)?;
        let fragments = match fragments {
            Some(path) => loader::load_fragments(path)?,
            None => {
                let derived = loader::derive_fragments(&dictionary);
                debug!("derived {} fragments from the dictionary", derived.len());
                derived
            }
        };
        let popularity = popularity
            .map(loader::load_popularity)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            dictionary,
            fragments,
            popularity,
        })
    }

    /// Dictionary words of exactly `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&Word> {
        self.dictionary.iter().filter(|w| w.len() == length).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn load_derives_fragments_when_no_file_given() {
        let path = std::env::temp_dir().join(format!("hangman_ai_{}_data.txt", std::process::id()));
        std::fs::write(&path, "running\nsinging\ncat\n").unwrap();

        let data = WordData::load(&path, None, None).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(data.dictionary.len(), 3);
        assert!(data.fragments.contains(&Fragment::suffix("ing")));
        assert!(data.popularity.is_empty());
    }

    #[test]
    fn words_of_length_filters() {
        let data = WordData {
            dictionary: words_from_slice(&["cat", "horse", "dog"]),
            ..WordData::default()
        };
        let three: Vec<&str> = data.words_of_length(3).iter().map(|w| w.text()).collect();
        assert_eq!(three, vec!["cat", "dog"]);
        assert!(data.words_of_length(4).is_empty());
    }
}
