// src/utils/format.rs
const MASK_CHAR: char = '•';

// Hide a password behind mask characters of the same length
pub fn mask_password(password: &str) -> String {
    password.chars().map(|_| MASK_CHAR).collect()
}

/// Render a score (0-100) as a fixed-width bar.
pub fn strength_meter(score: u8, width: usize) -> String {
    let filled = (score.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn format_entropy(bits: f64) -> String {
    format!("{:.1} bits", bits)
}
