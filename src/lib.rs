//! HangmanAI
//!
//! A hangman solver that reasons over a graph of predictions about the hidden
//! word ("contains `ing`", "starts with `un`", "matches `c-t`"), weights them
//! by how many popular candidate words satisfy them, and guesses the letter
//! underneath the heaviest one.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_ai::core::{BoardUpdate, Popularity, Word};
//! use hangman_ai::solver::{Solver, SolverConfig};
//!
//! let dictionary: Vec<Word> = ["cat", "cot", "dog"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let mut solver =
//!     Solver::new(SolverConfig::default(), 3, &dictionary, &[], Popularity::uniform()).unwrap();
//!
//! let guess = solver.next_guess().unwrap();
//! println!("Guessing {}", guess.letter);
//!
//! // the host says the letter is not in the word
//! solver.record(guess, BoardUpdate::Unchanged).unwrap();
//! assert_eq!(solver.wrong_guesses(), 1);
//! ```

// Core domain types
pub mod core;

// Prediction graph
pub mod prediction;

// Scoring, generation and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
