//! Common word fragments
//!
//! Fragments are well-known prefixes and suffixes ("un", "ing", ...) used to
//! seed `UsesBit` predictions.

use std::fmt;
use std::str::FromStr;

/// Where a fragment is anchored inside a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    Prefix,
    Suffix,
}

/// A prefix or suffix fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fragment {
    pub anchor: Anchor,
    pub text: String,
}

/// Error type for malformed fragment lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    MissingAnchor(String),
    EmptyText,
    /// Fragment text may only hold `a-z`
    InvalidCharacter(char),
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor(line) => {
                write!(f, "Fragment '{line}' must start with '+' (prefix) or '-' (suffix)")
            }
            Self::EmptyText => write!(f, "Fragment text must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Invalid character '{c}' in fragment, use a-z")
            }
        }
    }
}

impl std::error::Error for FragmentError {}

impl Fragment {
    #[must_use]
    pub fn prefix(text: impl Into<String>) -> Self {
        Self {
            anchor: Anchor::Prefix,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn suffix(text: impl Into<String>) -> Self {
        Self {
            anchor: Anchor::Suffix,
            text: text.into(),
        }
    }

    /// The `+prefix` / `-suffix` line form read by `FromStr`
    #[must_use]
    pub fn to_line(&self) -> String {
        match self.anchor {
            Anchor::Prefix => format!("+{}", self.text),
            Anchor::Suffix => format!("-{}", self.text),
        }
    }

    /// Whether `word` starts or ends with this fragment
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        match self.anchor {
            Anchor::Prefix => word.starts_with(&self.text),
            Anchor::Suffix => word.ends_with(&self.text),
        }
    }
}

/// Parses the `+prefix` / `-suffix` line format
impl FromStr for Fragment {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let anchor = match line.as_bytes().first() {
            Some(b'+') => Anchor::Prefix,
            Some(b'-') => Anchor::Suffix,
            _ => return Err(FragmentError::MissingAnchor(line.to_string())),
        };

        let text = line[1..].trim().to_lowercase();
        if text.is_empty() {
            return Err(FragmentError::EmptyText);
        }
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(FragmentError::InvalidCharacter(bad));
        }

        Ok(Self { anchor, text })
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor {
            Anchor::Prefix => write!(f, "{}-", self.text),
            Anchor::Suffix => write!(f, "-{}", self.text),
        }
    }
}
