//! Hangman solving engine
//!
//! Generators grow the prediction graph, the scorer filters candidates and
//! weighs predictions, and the selector turns the weights into a letter.

mod config;
mod engine;
mod error;
pub mod generators;
pub mod scorer;
pub mod selector;

pub use config::SolverConfig;
pub use engine::{Guess, Outcome, Solver};
pub use error::SolverError;
pub use scorer::RoundStats;
