//! Hangman board state
//!
//! The board is the revealed view of the hidden word: resolved letters at
//! their positions and `-` wherever the letter is still unknown.

use super::Word;
use std::fmt;

/// Marker for an unresolved position
pub const HOLE: u8 = b'-';

/// The current revealed state of the hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: String,
}

/// Error type for rejected board input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Input length differs from the word length
    WrongLength { expected: usize, got: usize },
    /// A previously resolved position was changed
    ChangedLetter { position: usize },
    /// Input contains something other than `a-z` or `-`
    InvalidCharacter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, got } => {
                write!(f, "Board must be {expected} characters long, got {got}")
            }
            Self::ChangedLetter { position } => {
                write!(f, "Position {} was already resolved and cannot change", position + 1)
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Invalid character '{c}', use a-z or '-'")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Result of reading a new board against the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardUpdate {
    /// Nothing new was revealed (the guess missed)
    Unchanged,
    /// At least one position was revealed
    Revealed(Board),
}

impl Board {
    /// An all-unknown board of the given length
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self {
            cells: "-".repeat(length),
        }
    }

    /// Parse a board string over `a-z` and `-`
    ///
    /// # Errors
    /// Returns `BoardError::InvalidCharacter` for any other character.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::Board;
    ///
    /// let board = Board::parse("C-T").unwrap();
    /// assert_eq!(board.text(), "c-t");
    /// assert!(!board.is_solved());
    /// assert!(Board::parse("c?t").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let cells = text.trim().to_lowercase();
        if let Some(bad) = cells
            .chars()
            .find(|&c| !(c.is_ascii_lowercase() || c == HOLE as char))
        {
            return Err(BoardError::InvalidCharacter(bad));
        }
        Ok(Self { cells })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True once no position is unknown
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.cells.as_bytes().contains(&HOLE)
    }

    /// Number of resolved positions
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.cells.bytes().filter(|&b| b != HOLE).count()
    }

    /// Distinct resolved letters in alphabetical order
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        (b'a'..=b'z')
            .filter(|l| self.cells.as_bytes().contains(l))
            .collect()
    }

    /// Per-position flags marking where `letter` sits on the board
    #[must_use]
    pub fn mask_for(&self, letter: u8) -> Vec<bool> {
        self.cells.bytes().map(|b| b == letter).collect()
    }

    /// Validate user input describing the next board state
    ///
    /// Empty input and input identical to the current board both mean the
    /// last guess missed.
    ///
    /// # Errors
    /// Returns `BoardError` if the input has the wrong length, contains
    /// invalid characters, or alters an already resolved position.
    pub fn apply_update(&self, input: &str) -> Result<BoardUpdate, BoardError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(BoardUpdate::Unchanged);
        }

        let next = Self::parse(trimmed)?;
        if next.len() != self.len() {
            return Err(BoardError::WrongLength {
                expected: self.len(),
                got: next.len(),
            });
        }

        if let Some(position) = self
            .cells
            .bytes()
            .zip(next.cells.bytes())
            .position(|(old, new)| old != HOLE && old != new)
        {
            return Err(BoardError::ChangedLetter { position });
        }

        if next == *self {
            Ok(BoardUpdate::Unchanged)
        } else {
            Ok(BoardUpdate::Revealed(next))
        }
    }

    /// Reveal every position where `target` has `letter`
    ///
    /// Used when the hidden word is known, e.g. for self-hosted games.
    #[must_use]
    pub fn reveal(&self, target: &Word, letter: u8) -> Self {
        let cells = self
            .cells
            .bytes()
            .zip(target.text().bytes())
            .map(|(cell, actual)| if actual == letter { actual } else { cell })
            .map(char::from)
            .collect();
        Self { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_board_is_all_holes() {
        let board = Board::blank(4);
        assert_eq!(board.text(), "----");
        assert_eq!(board.resolved_count(), 0);
        assert!(board.letters().is_empty());
        assert!(!board.is_solved());
    }

    #[test]
    fn letters_and_masks() {
        let board = Board::parse("t--t-a").unwrap();
        assert_eq!(board.letters(), vec![b'a', b't']);
        assert_eq!(
            board.mask_for(b't'),
            vec![true, false, false, true, false, false]
        );
        assert_eq!(board.resolved_count(), 3);
    }

    #[test]
    fn update_empty_input_is_a_miss() {
        let board = Board::parse("c--").unwrap();
        assert_eq!(board.apply_update(""), Ok(BoardUpdate::Unchanged));
        assert_eq!(board.apply_update("  \n"), Ok(BoardUpdate::Unchanged));
        assert_eq!(board.apply_update("c--"), Ok(BoardUpdate::Unchanged));
    }

    #[test]
    fn update_reveals_new_letters() {
        let board = Board::parse("c--").unwrap();
        let update = board.apply_update("c-t").unwrap();
        assert_eq!(update, BoardUpdate::Revealed(Board::parse("c-t").unwrap()));
    }

    #[test]
    fn update_rejects_wrong_length() {
        let board = Board::blank(3);
        assert_eq!(
            board.apply_update("----"),
            Err(BoardError::WrongLength {
                expected: 3,
                got: 4
            })
        );
    }

    #[test]
    fn update_rejects_changed_letter() {
        let board = Board::parse("c--").unwrap();
        assert_eq!(
            board.apply_update("b-t"),
            Err(BoardError::ChangedLetter { position: 0 })
        );
        assert_eq!(
            board.apply_update("--t"),
            Err(BoardError::ChangedLetter { position: 0 })
        );
    }

    #[test]
    fn update_rejects_bad_characters() {
        let board = Board::blank(3);
        assert_eq!(
            board.apply_update("c_t"),
            Err(BoardError::InvalidCharacter('_'))
        );
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let target = Word::new("banana").unwrap();
        let board = Board::blank(6).reveal(&target, b'a');
        assert_eq!(board.text(), "-a-a-a");
        let board = board.reveal(&target, b'z');
        assert_eq!(board.text(), "-a-a-a");
        let board = board.reveal(&target, b'b').reveal(&target, b'n');
        assert!(board.is_solved());
        assert_eq!(board.text(), "banana");
    }
}
