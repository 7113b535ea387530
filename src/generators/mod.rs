// src/generators/mod.rs
pub mod charset;
pub mod password;

pub use charset::CharacterClass;
pub use password::{
    default_password_options, generate_password, generate_password_with_rng, generate_passwords,
    validate_password_options, PasswordGenerator, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
