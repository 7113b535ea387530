// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    #[serde(default)]
    pub exclude_ambiguous: bool,
}

impl PasswordOptions {
    /// True when at least one character class toggle is set.
    pub fn any_class_selected(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

impl Default for PasswordOptions {
    // Deliberately selects no class; the generator falls back to all four.
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_ambiguous: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Buckets a composite score. Each boundary belongs to the upper bucket.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthLevel::Weak,
            40..=59 => StrengthLevel::Fair,
            60..=79 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "weak"),
            StrengthLevel::Fair => write!(f, "fair"),
            StrengthLevel::Good => write!(f, "good"),
            StrengthLevel::Strong => write!(f, "strong"),
        }
    }
}

/// Coarse brute-force time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrackTime {
    Instant,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CrackTime::Instant => "instant",
            CrackTime::Seconds => "seconds",
            CrackTime::Minutes => "minutes",
            CrackTime::Hours => "hours",
            CrackTime::Days => "days",
            CrackTime::Months => "months",
            CrackTime::Years => "years",
            CrackTime::Decades => "decades",
            CrackTime::Centuries => "centuries",
            CrackTime::Millennia => "millennia",
        };
        f.write_str(text)
    }
}

// Strength report produced by the evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
    pub feedback: Vec<String>,
    pub crack_time: String,
}

pub const PROMPT_FOR_INPUT: &str = "Please enter a password";

impl PasswordStrength {
    /// Result for an empty password.
    pub fn empty() -> Self {
        Self {
            score: 0,
            level: StrengthLevel::Weak,
            feedback: vec![PROMPT_FOR_INPUT.to_string()],
            crack_time: "-".to_string(),
        }
    }
}
