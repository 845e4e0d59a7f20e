//! Prediction variants and their local predicates
//!
//! Each variant is a hypothesis about the hidden word. Variants only know how
//! to test themselves against a word and how they relate structurally to
//! other variants; bookkeeping (weights, flags, edges) lives in the registry.

use crate::core::{Fragment, HOLE};
use std::fmt;

/// A constraint hypothesis about the hidden word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionKind {
    /// The word contains `segment` somewhere
    Contains { segment: String },
    /// `letter` sits exactly at the positions flagged in `mask` and nowhere else
    Not { letter: u8, mask: Vec<bool> },
    /// The word starts or ends with a known fragment
    UsesBit(Fragment),
    /// The word matches `holemap` at every non-`-` position
    MatchesHolemap { holemap: String },
}

impl PredictionKind {
    #[must_use]
    pub fn contains(segment: impl Into<String>) -> Self {
        Self::Contains {
            segment: segment.into(),
        }
    }

    #[must_use]
    pub fn holemap(holemap: impl Into<String>) -> Self {
        Self::MatchesHolemap {
            holemap: holemap.into(),
        }
    }

    /// Whether `word` satisfies this constraint
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::prediction::PredictionKind;
    ///
    /// assert!(PredictionKind::contains("at").valid_for("cat"));
    /// assert!(PredictionKind::holemap("c-t").valid_for("cot"));
    /// assert!(!PredictionKind::holemap("c-t").valid_for("cots"));
    /// ```
    #[must_use]
    pub fn valid_for(&self, word: &str) -> bool {
        match self {
            Self::Contains { segment } => word.contains(segment.as_str()),
            Self::Not { letter, mask } => {
                word.len() == mask.len()
                    && word
                        .bytes()
                        .zip(mask)
                        .all(|(c, &here)| (c == *letter) == here)
            }
            Self::UsesBit(fragment) => fragment.matches(word),
            Self::MatchesHolemap { holemap } => {
                word.len() == holemap.len()
                    && word
                        .bytes()
                        .zip(holemap.bytes())
                        .all(|(c, h)| h == HOLE || c == h)
            }
        }
    }

    /// True if `other` must hold whenever `self` holds
    ///
    /// `self` is the more specific prediction; `other` is one of its parents.
    #[must_use]
    pub fn depends_on(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Contains { segment }, Self::Contains { segment: base }) => {
                segment.contains(base.as_str())
            }
            (Self::Not { letter, .. }, Self::Contains { segment }) => {
                segment.as_bytes().contains(letter)
            }
            (Self::UsesBit(fragment), Self::Contains { segment }) => {
                fragment.text.contains(segment.as_str())
            }
            (Self::MatchesHolemap { holemap }, Self::MatchesHolemap { holemap: looser }) => {
                holemap.len() == looser.len()
                    && holemap
                        .bytes()
                        .zip(looser.bytes())
                        .all(|(a, b)| a == b || a == HOLE || b == HOLE)
                    && resolved(holemap) >= resolved(looser)
            }
            (Self::MatchesHolemap { holemap }, Self::Contains { segment }) => {
                holemap.contains(segment.as_str())
            }
            _ => false,
        }
    }

    /// Structural equality within a variant
    ///
    /// Never true across variants.
    #[must_use]
    pub fn congruent(&self, other: &Self) -> bool {
        self == other
    }

    /// Static weight multiplier, growing with how specific the constraint is
    #[must_use]
    pub fn importance(&self) -> f64 {
        match self {
            Self::Contains { segment } => 0.1 * segment.len() as f64 + 0.1,
            Self::Not { .. } => 1.0,
            Self::UsesBit(fragment) => 0.125 + 0.075 * fragment.text.len() as f64,
            Self::MatchesHolemap { holemap } => 0.15 * resolved(holemap) as f64 + 0.2,
        }
    }

    /// The guessed letter, if this is a single-letter `Contains`
    #[must_use]
    pub fn as_letter(&self) -> Option<char> {
        match self {
            Self::Contains { segment } if segment.len() == 1 => segment.chars().next(),
            _ => None,
        }
    }
}

fn resolved(holemap: &str) -> usize {
    holemap.bytes().filter(|&b| b != HOLE).count()
}

impl fmt::Display for PredictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains { segment } => write!(f, "Word contains {segment}"),
            Self::Not { letter, mask } => {
                let positions: String = mask
                    .iter()
                    .map(|&here| if here { *letter as char } else { '.' })
                    .collect();
                write!(f, "Letter {} only at {positions}", *letter as char)
            }
            Self::UsesBit(fragment) => match fragment.anchor {
                crate::core::Anchor::Prefix => write!(f, "Word starts with {}", fragment.text),
                crate::core::Anchor::Suffix => write!(f, "Word ends with {}", fragment.text),
            },
            Self::MatchesHolemap { holemap } => write!(f, "Word matches {holemap}"),
        }
    }
}
