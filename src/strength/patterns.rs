// src/strength/patterns.rs
//! Fixed pattern data and detectors used by the complexity score.

/// Small heuristic list, matched as substrings of the lowercased password.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "qwerty", "abc123",
    "monkey", "1234567", "letmein", "trustno1", "dragon",
    "baseball", "111111", "iloveyou", "master", "sunshine",
    "ashley", "bailey", "passw0rd", "shadow", "123123",
    "654321", "superman", "qazwsx", "michael", "football",
];

pub const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "asdfgh", "zxcvbn", "12345", "qazwsx",
    "qwertyuiop", "asdfghjkl", "zxcvbnm",
];

pub fn contains_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| lower.contains(common))
}

pub fn contains_keyboard_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    KEYBOARD_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}

/// Three or more consecutive copies of one character. Line terminators never count.
pub fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| !is_line_terminator(w[0]) && w[0] == w[1] && w[1] == w[2])
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Three ascending digits such as `123` or `789`.
pub fn has_sequential_digits(password: &str) -> bool {
    ascending_run(password, |c| c.is_ascii_digit().then_some(c))
}

/// Three ascending letters such as `abc` or `XyZ`, case-insensitive.
pub fn has_sequential_letters(password: &str) -> bool {
    ascending_run(password, |c| {
        c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
    })
}

fn ascending_run(password: &str, normalize: impl Fn(char) -> Option<char>) -> bool {
    let chars: Vec<Option<char>> = password.chars().map(normalize).collect();
    chars.windows(3).any(|w| match (w[0], w[1], w[2]) {
        (Some(a), Some(b), Some(c)) => b as u32 == a as u32 + 1 && c as u32 == b as u32 + 1,
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_passwords_match_as_substrings() {
        assert!(contains_common_password("MyPassword!"));
        assert!(contains_common_password("xxDRAGONxx"));
        assert!(!contains_common_password("correct-horse"));
    }

    #[test]
    fn keyboard_patterns_are_case_insensitive() {
        assert!(contains_keyboard_pattern("QWERTY"));
        assert!(contains_keyboard_pattern("a12345b"));
        assert!(!contains_keyboard_pattern("1234"));
    }

    #[test]
    fn repeated_runs_need_three_characters() {
        assert!(has_repeated_run("aaa"));
        assert!(has_repeated_run("x!!!y"));
        assert!(!has_repeated_run("aabbaa"));
        assert!(!has_repeated_run("\n\n\n"));
    }

    #[test]
    fn sequential_digits() {
        assert!(has_sequential_digits("a789b"));
        assert!(has_sequential_digits("012"));
        assert!(!has_sequential_digits("135"));
        assert!(!has_sequential_digits("321"));
        assert!(!has_sequential_digits("890"));
    }

    #[test]
    fn sequential_letters_ignore_case() {
        assert!(has_sequential_letters("xYz"));
        assert!(has_sequential_letters("ABC"));
        assert!(!has_sequential_letters("cba"));
        assert!(!has_sequential_letters("yza"));
        assert!(!has_sequential_letters("Z[\\"));
    }
}
