//! Formatting utilities for terminal output

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

/// Remaining guesses as a bar with one cell per guess in the budget
#[must_use]
pub fn lives_bar(remaining: usize, budget: usize) -> String {
    create_progress_bar(remaining as f64, budget as f64, budget)
}
