// src/generators/password.rs
use rand::{CryptoRng, Rng};

use crate::crypto::{secure_choice, secure_shuffle, OsRng};
use crate::generators::charset::CharacterClass;
use crate::models::{PasswordOptions, PasswordStrength};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordOptions) -> String {
        let password = generate_password(options);
        log::debug!(
            "Generated password of length {} (requested {})",
            password.chars().count(),
            options.length
        );
        password
    }

    pub fn analyze_password_strength(&self, password: &str) -> PasswordStrength {
        crate::strength::evaluate_password_strength(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn selected_classes(options: &PasswordOptions) -> Vec<CharacterClass> {
    let selected: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| match class {
            CharacterClass::Uppercase => options.include_uppercase,
            CharacterClass::Lowercase => options.include_lowercase,
            CharacterClass::Numbers => options.include_numbers,
            CharacterClass::Symbols => options.include_symbols,
        })
        .collect();

    // Nothing selected: use every class, each still required once
    if selected.is_empty() {
        CharacterClass::ALL.to_vec()
    } else {
        selected
    }
}

/// Generate a password from the platform CSPRNG.
pub fn generate_password(options: &PasswordOptions) -> String {
    generate_password_with_rng(options, &mut OsRng)
}

/// Generate a password, drawing every random choice from `rng`.
///
/// One character is drawn from each selected class, the rest are filled from
/// the combined charset, and the whole sequence is shuffled. The result is
/// `max(options.length, required)` characters long.
pub fn generate_password_with_rng<R>(options: &PasswordOptions, rng: &mut R) -> String
where
    R: Rng + CryptoRng + ?Sized,
{
    let mut charset: Vec<char> = Vec::new();
    let mut chars: Vec<char> = Vec::with_capacity(options.length.max(CharacterClass::ALL.len()));

    for class in selected_classes(options) {
        let alphabet = class.alphabet(options.exclude_ambiguous);
        chars.push(secure_choice(rng, &alphabet));
        charset.extend(alphabet);
    }

    let final_length = options.length.max(chars.len());
    while chars.len() < final_length {
        chars.push(secure_choice(rng, &charset));
    }

    secure_shuffle(rng, &mut chars);
    chars.into_iter().collect()
}

/// Generate `count` independent passwords.
pub fn generate_passwords(options: &PasswordOptions, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_password(options)).collect()
}

/// UI gate for the generate action. The generator itself accepts any options.
pub fn validate_password_options(options: &PasswordOptions) -> bool {
    if !options.any_class_selected() {
        return false;
    }

    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length)
}

pub fn default_password_options() -> PasswordOptions {
    PasswordOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::AMBIGUOUS_CHARS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn options(length: usize, upper: bool, lower: bool, numbers: bool, symbols: bool) -> PasswordOptions {
        PasswordOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
            exclude_ambiguous: false,
        }
    }

    #[test]
    fn only_selected_classes_appear() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let opts = options(32, false, false, true, false);
        for _ in 0..50 {
            let password = generate_password_with_rng(&opts, &mut rng);
            assert_eq!(password.len(), 32);
            assert!(password.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn short_length_grows_to_required_count() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let password = generate_password_with_rng(&options(2, true, true, true, true), &mut rng);
        assert_eq!(password.len(), 4);

        let password = generate_password_with_rng(&options(0, true, false, false, true), &mut rng);
        assert_eq!(password.len(), 2);
    }

    #[test]
    fn no_class_selected_falls_back_to_all_four() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let opts = options(4, false, false, false, false);
        for _ in 0..100 {
            let password = generate_password_with_rng(&opts, &mut rng);
            assert_eq!(password.len(), 4);
            for class in CharacterClass::ALL {
                assert!(password.chars().any(|c| class.contains(c)), "{:?} missing", class);
            }
        }
    }

    #[test]
    fn ambiguous_characters_are_excluded() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let mut opts = options(64, true, true, true, true);
        opts.exclude_ambiguous = true;
        for _ in 0..50 {
            let password = generate_password_with_rng(&opts, &mut rng);
            assert!(!password.chars().any(|c| AMBIGUOUS_CHARS.contains(c)));
        }
    }

    #[test]
    fn facade_generates_non_empty_password() {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&default_password_options());
        assert_eq!(password.len(), 16);
        assert!(generator.analyze_password_strength(&password).score > 0);
    }

    #[test]
    fn batch_generation_returns_requested_count() {
        let passwords = generate_passwords(&options(12, true, true, false, false), 5);
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 12));
    }

    #[test]
    fn validator_checks_length_bounds() {
        assert!(!validate_password_options(&options(3, true, false, false, false)));
        assert!(validate_password_options(&options(4, true, false, false, false)));
        assert!(validate_password_options(&options(128, false, false, false, true)));
        assert!(!validate_password_options(&options(129, false, false, false, true)));
    }

    #[test]
    fn validator_rejects_no_class_at_any_length() {
        for length in [0, 4, 16, 128, 500] {
            assert!(!validate_password_options(&options(length, false, false, false, false)));
        }
    }

    #[test]
    fn defaults_select_no_class() {
        let defaults = default_password_options();
        assert_eq!(defaults.length, 16);
        assert!(!defaults.any_class_selected());
        assert!(!defaults.exclude_ambiguous);
        assert!(!validate_password_options(&defaults));
    }
}
