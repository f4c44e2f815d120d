// src/utils/format.rs
use console::style;

use crate::models::StrengthScore;

pub const METER_WIDTH: usize = 20;

// Filled share of the meter, proportional to the score
pub fn strength_bar(score: StrengthScore, width: usize) -> String {
    let filled = (score.value() as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Meter plus label, coloured the way the page colours its strength text.
pub fn render_strength(score: StrengthScore) -> String {
    let label = score.label();
    format!(
        "{} {:>3}/100  {}",
        style(strength_bar(score, METER_WIDTH)).fg(label.color()),
        score.value(),
        style(label.display_text()).fg(label.color()).bold()
    )
}

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
