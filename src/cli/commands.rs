// src/cli/commands.rs
use std::fmt;
use clap::{Args, Subcommand};
use clap::builder::RangedU64ValueParser;

use crate::generators::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::models::PasswordOptions;

#[derive(Subcommand)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short, value_parser = RangedU64ValueParser::<usize>::new()
            .range((MIN_PASSWORD_LENGTH as u64)..=(MAX_PASSWORD_LENGTH as u64)))]
        length: Option<usize>,

        #[command(flatten)]
        classes: ClassFlags,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=100))]
        count: usize,

        /// Copy the (last) generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Score the strength of a password
    Evaluate {
        /// Password to evaluate (prompted for when omitted)
        password: Option<String>,
    },

    /// Check whether a set of options may be used for generation
    CheckOptions {
        /// Password length
        #[arg(long, short, default_value_t = 16)]
        length: usize,

        #[command(flatten)]
        classes: ClassFlags,
    },

    /// Interactive menu
    Interactive,
}

/// Character class toggles shared by several commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ClassFlags {
    /// Include uppercase letters
    #[arg(long, short = 'u')]
    pub uppercase: bool,

    /// Include lowercase letters
    #[arg(long, short = 'w')]
    pub lowercase: bool,

    /// Include numbers
    #[arg(long, short = 'd')]
    pub numbers: bool,

    /// Include symbols
    #[arg(long, short = 's')]
    pub symbols: bool,

    /// Exclude look-alike characters (0 O I l 1 i o)
    #[arg(long, short = 'x')]
    pub exclude_ambiguous: bool,
}

// Hand-written so a password passed to `evaluate` never reaches a log line
impl fmt::Debug for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliCommand::Generate { length, classes, count, copy } => f
                .debug_struct("Generate")
                .field("length", length)
                .field("classes", classes)
                .field("count", count)
                .field("copy", copy)
                .finish(),
            CliCommand::Evaluate { password } => f
                .debug_struct("Evaluate")
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .finish(),
            CliCommand::CheckOptions { length, classes } => f
                .debug_struct("CheckOptions")
                .field("length", length)
                .field("classes", classes)
                .finish(),
            CliCommand::Interactive => f.write_str("Interactive"),
        }
    }
}

impl ClassFlags {
    pub fn to_options(&self, length: usize) -> PasswordOptions {
        PasswordOptions {
            length,
            include_uppercase: self.uppercase,
            include_lowercase: self.lowercase,
            include_numbers: self.numbers,
            include_symbols: self.symbols,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}
