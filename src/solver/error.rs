//! Fatal solver conditions

use crate::core::BoardError;
use std::fmt;

/// Conditions that end a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Word length of zero was requested
    ZeroLength,
    /// The dictionary has no word of the requested length
    NoCandidates { length: usize },
    /// Filtering left no word consistent with the board and constraints
    CandidatesExhausted { constraints: usize },
    /// Every active prediction is resolved or has no open foundation
    NoPredictionsRemain,
    /// The selector produced something other than a single letter
    NonFoundationalGuess(String),
    /// A board update that does not extend the current board
    InconsistentBoard(BoardError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Word length must be at least 1"),
            Self::NoCandidates { length } => {
                write!(f, "No dictionary word has {length} letters")
            }
            Self::CandidatesExhausted { constraints } => write!(
                f,
                "No more words: the board and {constraints} active constraints admit no candidate"
            ),
            Self::NoPredictionsRemain => write!(f, "No predictions remaining"),
            Self::NonFoundationalGuess(desc) => {
                write!(f, "Invalid prediction type selected as guess: {desc}")
            }
            Self::InconsistentBoard(e) => write!(f, "Inconsistent board update: {e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InconsistentBoard(e) => Some(e),
            _ => None,
        }
    }
}
