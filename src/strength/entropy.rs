// src/strength/entropy.rs
use crate::models::CrackTime;

/// Assumed offline guessing rate (modern GPU rig).
pub const GUESSES_PER_SECOND: f64 = 1e11;

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 32;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;

/// Keyspace size implied by the classes actually present in `password`.
pub fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += LOWERCASE_POOL;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += UPPERCASE_POOL;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += DIGIT_POOL;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        size += SYMBOL_POOL;
    }
    size
}

/// Entropy in bits: `log2(charset_size ^ length)`.
pub fn calculate_entropy(password: &str) -> f64 {
    let size = charset_size(password);
    if size == 0 {
        return 0.0;
    }
    // length * log2(size) avoids overflowing the power
    password.chars().count() as f64 * (size as f64).log2()
}

/// Seconds to search half the keyspace at `GUESSES_PER_SECOND`.
pub fn seconds_to_crack(entropy: f64) -> f64 {
    2f64.powf(entropy) / (2.0 * GUESSES_PER_SECOND)
}

pub fn estimate_crack_time(entropy: f64) -> CrackTime {
    let seconds = seconds_to_crack(entropy);

    if seconds < 1.0 {
        CrackTime::Instant
    } else if seconds < MINUTE {
        CrackTime::Seconds
    } else if seconds < HOUR {
        CrackTime::Minutes
    } else if seconds < DAY {
        CrackTime::Hours
    } else if seconds < MONTH {
        CrackTime::Days
    } else if seconds < YEAR {
        CrackTime::Months
    } else if seconds < YEAR * 100.0 {
        CrackTime::Years
    } else if seconds < YEAR * 1_000.0 {
        CrackTime::Decades
    } else if seconds < YEAR * 10_000.0 {
        CrackTime::Centuries
    } else {
        CrackTime::Millennia
    }
}
