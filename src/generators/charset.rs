// src/generators/charset.rs
use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easy to confuse with one another.
pub const AMBIGUOUS_CHARS: &str = "0OIl1io";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Fixed order in which required characters are drawn.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    fn source(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Effective alphabet for this class. Symbols ignore `exclude_ambiguous`.
    pub fn alphabet(&self, exclude_ambiguous: bool) -> Vec<char> {
        let filter = exclude_ambiguous && *self != CharacterClass::Symbols;
        self.source()
            .chars()
            .filter(|c| !filter || !AMBIGUOUS_CHARS.contains(*c))
            .collect()
    }

    /// Whether `c` belongs to the full (unfiltered) class.
    pub fn contains(&self, c: char) -> bool {
        self.source().contains(c)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "Uppercase (A-Z)"),
            CharacterClass::Lowercase => write!(f, "Lowercase (a-z)"),
            CharacterClass::Numbers => write!(f, "Numbers (0-9)"),
            CharacterClass::Symbols => write!(f, "Symbols (!@#$...)"),
        }
    }
}
