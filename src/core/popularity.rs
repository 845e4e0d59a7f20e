//! Word popularity table

use rustc_hash::FxHashMap;

/// Relative frequency of each word
///
/// Words missing from the table fall back to the smallest observed weight.
#[derive(Debug, Clone)]
pub struct Popularity {
    weights: FxHashMap<String, f64>,
    floor: f64,
}

impl Popularity {
    /// Every word weighs 1.0
    #[must_use]
    pub fn uniform() -> Self {
        Self {
            weights: FxHashMap::default(),
            floor: 1.0,
        }
    }

    /// Build a table from `(word, weight)` pairs
    ///
    /// Later duplicates overwrite earlier ones.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::Popularity;
    ///
    /// let table = Popularity::from_pairs([("the".to_string(), 50.0), ("gnu".to_string(), 2.0)]);
    /// assert_eq!(table.get("the"), 50.0);
    /// assert_eq!(table.get("zyx"), 2.0);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let weights: FxHashMap<String, f64> = pairs.into_iter().collect();
        let floor = weights
            .values()
            .copied()
            .min_by(f64::total_cmp)
            .unwrap_or(1.0);
        Self { weights, floor }
    }

    /// Weight of `word`, or the minimum observed weight if unlisted
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(self.floor)
    }

    /// Weight given to unlisted words
    #[must_use]
    pub const fn floor(&self) -> f64 {
        self.floor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for Popularity {
    fn default() -> Self {
        Self::uniform()
    }
}
