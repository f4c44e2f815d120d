// src/generators/strength.rs
use crate::models::StrengthScore;

/// Additive strength heuristic over the characters actually present.
///
/// Length bonuses: 20 at 8 characters, another 20 at 12, another 10 at 16.
/// Variety bonuses: lowercase 10, uppercase 15, digit 15, anything outside
/// `[A-Za-z0-9]` 20. The sum is capped at 100.
pub fn analyze_password_strength(password: &str) -> StrengthScore {
    let mut score: u32 = 0;
    // Counted in chars: a character outside the BMP counts once here but
    // twice in a UTF-16 length such as a browser's `String.length`
    let length = password.chars().count();

    // Length contribution (up to 50 points)
    if length >= 8 {
        score += 20;
    }
    if length >= 12 {
        score += 20;
    }
    if length >= 16 {
        score += 10;
    }

    // Character variety
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 20;
    }

    StrengthScore::new(score)
}
