//! Formatting utilities for terminal output

use crate::core::{Board, Word};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format information as a bar scaled to `max_bits`
#[must_use]
pub fn information_bar(information: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(information, max_bits, width)
}

/// One line per observation: the guess in capitals and its emoji feedback
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .observations()
        .iter()
        .map(|obs| {
            format!(
                "{} {}",
                obs.guess.as_str().to_uppercase(),
                obs.feedback.to_emoji()
            )
        })
        .collect()
}

/// Words in capitals, separated by spaces, cut off after `limit`
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    let mut shown: Vec<String> = words
        .iter()
        .take(limit)
        .map(|w| w.as_str().to_uppercase())
        .collect();

    if words.len() > limit {
        shown.push(format!("… (+{})", words.len() - limit));
    }

    shown.join(" ")
}
