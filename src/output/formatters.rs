//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};

/// Format a guess with its feedback, e.g. "CLOUT 🟩🟨⬜⬜⬜"
#[must_use]
pub fn round_line(guess: &Word, feedback: &Feedback) -> String {
    format!("{} {}", guess.as_str().to_uppercase(), feedback.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_line_renders_emoji() {
        let guess = Word::new("clout").unwrap();
        let feedback = Feedback::parse("xygxx").unwrap();
        assert_eq!(round_line(&guess, &feedback), "CLOUT ⬜🟨🟩⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
