//! Prediction graph
//!
//! Predictions are constraints on the hidden word. The registry owns all of
//! them, dedups structurally identical ones and tracks which predictions
//! depend on which.

mod kind;
mod registry;

pub use kind::PredictionKind;
pub use registry::{Prediction, PredictionId, Registry};
