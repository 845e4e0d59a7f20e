//! Core domain types for hangman
//!
//! This module contains the plain domain types the prediction graph reasons about.
//! Nothing here knows about predictions or scoring.

mod board;
mod fragment;
mod popularity;
mod word;

pub use board::{Board, BoardError, BoardUpdate, HOLE};
pub use fragment::{Anchor, Fragment, FragmentError};
pub use popularity::Popularity;
pub use word::{Word, WordError};
