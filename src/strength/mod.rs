// src/strength/mod.rs
//! Heuristic password strength evaluation.
//!
//! The composite score is the sum of a length score (0-30), a character
//! diversity score (0-40) and a complexity score (0-30).
pub mod entropy;
pub mod patterns;

pub use entropy::{calculate_entropy, charset_size, estimate_crack_time};
pub use patterns::{COMMON_PASSWORDS, KEYBOARD_PATTERNS};

use crate::models::{PasswordStrength, StrengthLevel};
use patterns::{
    contains_common_password, contains_keyboard_pattern, has_repeated_run, has_sequential_digits,
    has_sequential_letters,
};

pub const RECOMMENDED_LENGTH: usize = 12;

pub const FEEDBACK_LENGTH: &str = "Use at least 12 characters";
pub const FEEDBACK_LOWERCASE: &str = "Add lowercase letters";
pub const FEEDBACK_UPPERCASE: &str = "Add uppercase letters";
pub const FEEDBACK_NUMBERS: &str = "Add numbers";
pub const FEEDBACK_SYMBOLS: &str = "Add special characters";
pub const FEEDBACK_REPEATS: &str = "Avoid repeating the same character";
pub const FEEDBACK_COMMON: &str = "Avoid common password patterns";
pub const FEEDBACK_KEYBOARD: &str = "Avoid keyboard sequences";
pub const FEEDBACK_EXCELLENT: &str = "Excellent password strength!";
pub const FEEDBACK_GOOD: &str = "Good password strength";
pub const FEEDBACK_FAIR: &str = "Fair password strength, consider strengthening it";
pub const FEEDBACK_WEAK: &str = "Weak password, consider improving it";

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

// Anything outside [A-Za-z0-9] counts as a symbol
fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Stepped length score (0-30).
pub fn calculate_length_score(password: &str) -> u8 {
    match password.chars().count() {
        0..=7 => 0,
        8..=11 => 10,
        12..=15 => 20,
        16..=19 => 25,
        _ => 30,
    }
}

/// 10 points per character class present (0-40).
pub fn calculate_diversity_score(password: &str) -> u8 {
    let present = [
        has_lowercase(password),
        has_uppercase(password),
        has_digit(password),
        has_symbol(password),
    ]
    .into_iter()
    .filter(|&present| present)
    .count() as u8;

    present * 10
}

/// Starts at 30 and subtracts a penalty per detected weakness, floored at 0.
pub fn calculate_complexity_score(password: &str) -> u8 {
    let mut penalty = 0u8;

    if contains_common_password(password) {
        penalty += 15;
    }
    if contains_keyboard_pattern(password) {
        penalty += 10;
    }
    if has_repeated_run(password) {
        penalty += 5;
    }
    if has_sequential_digits(password) {
        penalty += 5;
    }
    if has_sequential_letters(password) {
        penalty += 5;
    }

    30u8.saturating_sub(penalty)
}

/// Ordered improvement hints. Never empty.
pub fn generate_feedback(password: &str, score: u8) -> Vec<String> {
    let rules = [
        (password.chars().count() < RECOMMENDED_LENGTH, FEEDBACK_LENGTH),
        (!has_lowercase(password), FEEDBACK_LOWERCASE),
        (!has_uppercase(password), FEEDBACK_UPPERCASE),
        (!has_digit(password), FEEDBACK_NUMBERS),
        (!has_symbol(password), FEEDBACK_SYMBOLS),
        (has_repeated_run(password), FEEDBACK_REPEATS),
        (contains_common_password(password), FEEDBACK_COMMON),
        (contains_keyboard_pattern(password), FEEDBACK_KEYBOARD),
    ];

    let mut feedback: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, message)| message.to_string())
        .collect();

    if feedback.is_empty() {
        let message = if score >= 80 {
            FEEDBACK_EXCELLENT
        } else if score >= 60 {
            FEEDBACK_GOOD
        } else if score >= 40 {
            FEEDBACK_FAIR
        } else {
            FEEDBACK_WEAK
        };
        feedback.push(message.to_string());
    }

    feedback
}

/// Score `password`. The empty string yields [`PasswordStrength::empty`].
pub fn evaluate_password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::empty();
    }

    let score = calculate_length_score(password)
        + calculate_diversity_score(password)
        + calculate_complexity_score(password);

    let entropy = calculate_entropy(password);

    PasswordStrength {
        score,
        level: StrengthLevel::from_score(score),
        feedback: generate_feedback(password, score),
        crack_time: estimate_crack_time(entropy).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_score_steps() {
        assert_eq!(calculate_length_score("a".repeat(7).as_str()), 0);
        assert_eq!(calculate_length_score("a".repeat(8).as_str()), 10);
        assert_eq!(calculate_length_score("a".repeat(11).as_str()), 10);
        assert_eq!(calculate_length_score("a".repeat(12).as_str()), 20);
        assert_eq!(calculate_length_score("a".repeat(16).as_str()), 25);
        assert_eq!(calculate_length_score("a".repeat(19).as_str()), 25);
        assert_eq!(calculate_length_score("a".repeat(20).as_str()), 30);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(calculate_length_score("éééééééé"), 10);
    }

    #[test]
    fn diversity_score_per_class() {
        assert_eq!(calculate_diversity_score("abc"), 10);
        assert_eq!(calculate_diversity_score("aB"), 20);
        assert_eq!(calculate_diversity_score("aB3"), 30);
        assert_eq!(calculate_diversity_score("aB3 "), 40);
    }

    #[test]
    fn complexity_penalties_stack_and_floor_at_zero() {
        assert_eq!(calculate_complexity_score("Zp9#"), 30);
        // repeat run only
        assert_eq!(calculate_complexity_score("Zp999#"), 25);
        // keyboard + digit run
        assert_eq!(calculate_complexity_score("x12345x"), 15);
        // common + keyboard + digit run
        assert_eq!(calculate_complexity_score("x123456x"), 0);
        // common(15) + keyboard(10) + repeat(5) + digits(5) + letters(5)
        assert_eq!(calculate_complexity_score("qwerty111123abc"), 0);
    }

    #[test]
    fn abc123_hits_every_sequence_rule() {
        // common(-15), digit run(-5), letter run(-5)
        assert_eq!(calculate_complexity_score("abc123"), 5);
        let strength = evaluate_password_strength("abc123");
        assert_eq!(strength.score, 25);
        assert_eq!(strength.level, StrengthLevel::Weak);
    }

    #[test]
    fn sample_password_shows_every_class_hint() {
        let strength = evaluate_password_strength("AAAAAAAA");
        assert_eq!(strength.score, 45);
        assert_eq!(strength.level, StrengthLevel::Fair);
        assert_eq!(
            strength.feedback,
            vec![
                FEEDBACK_LENGTH,
                FEEDBACK_LOWERCASE,
                FEEDBACK_NUMBERS,
                FEEDBACK_SYMBOLS,
                FEEDBACK_REPEATS,
            ]
        );
    }

    #[test]
    fn banded_message_only_when_no_rule_fires() {
        assert_eq!(generate_feedback("Zp9#Zp9#Zp9#", 85), vec![FEEDBACK_EXCELLENT]);
        assert_eq!(generate_feedback("Zp9#Zp9#Zp9#", 60), vec![FEEDBACK_GOOD]);
        assert_eq!(generate_feedback("Zp9#Zp9#Zp9#", 40), vec![FEEDBACK_FAIR]);
        assert_eq!(generate_feedback("Zp9#Zp9#Zp9#", 39), vec![FEEDBACK_WEAK]);
        assert_eq!(generate_feedback("short", 85)[0], FEEDBACK_LENGTH);
    }

    #[test]
    fn feedback_order_is_fixed() {
        let feedback = generate_feedback("qwerty", 15);
        assert_eq!(
            feedback,
            vec![
                FEEDBACK_LENGTH,
                FEEDBACK_UPPERCASE,
                FEEDBACK_NUMBERS,
                FEEDBACK_SYMBOLS,
                FEEDBACK_COMMON,
                FEEDBACK_KEYBOARD,
            ]
        );
    }

    #[test]
    fn empty_password_is_canonical() {
        assert_eq!(evaluate_password_strength(""), PasswordStrength::empty());
    }
}
