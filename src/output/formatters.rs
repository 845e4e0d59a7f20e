//! Formatting utilities for terminal output

use crate::core::HOLE;

/// Spread a board out for reading: `c-t` becomes `C _ T`
#[must_use]
pub fn spaced_board(board: &str) -> String {
    board
        .bytes()
        .map(|b| {
            if b == HOLE {
                '_'
            } else {
                char::from(b.to_ascii_uppercase())
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One mark per wrong guess out of `max_wrong`, e.g. `xx....`
#[must_use]
pub fn wrong_guess_meter(wrong: usize, max_wrong: usize) -> String {
    let shown = wrong.min(max_wrong);
    format!("{}{}", "x".repeat(shown), ".".repeat(max_wrong - shown))
}
