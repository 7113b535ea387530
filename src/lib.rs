//! Random password generation and heuristic strength scoring.
//!
//! The core is three pure functions plus the default options:
//!
//! ```
//! use password_factory::{evaluate_password_strength, generate_password, validate_password_options, PasswordOptions};
//!
//! let options = PasswordOptions { include_lowercase: true, include_numbers: true, ..PasswordOptions::default() };
//! assert!(validate_password_options(&options));
//!
//! let password = generate_password(&options);
//! assert_eq!(password.len(), 16);
//! let report = evaluate_password_strength(&password);
//! assert!(!report.feedback.is_empty());
//! ```
pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use crate::generators::{
    default_password_options, generate_password, generate_passwords, validate_password_options,
    PasswordGenerator,
};
pub use crate::models::{CrackTime, PasswordOptions, PasswordStrength, StrengthLevel};
pub use crate::strength::evaluate_password_strength;
