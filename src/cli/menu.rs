// src/cli/menu.rs
use inquire::{Confirm, CustomType, InquireError, MultiSelect, Password, PasswordDisplayMode, Select};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use console::Term;

use crate::cli::clipboard::{ClipboardShell, CopyOutcome};
use crate::cli::render::{render_options, render_password, render_strength, Palette};
use crate::core::config::Config;
use crate::core::preferences::Preferences;
use crate::generators::{validate_password_options, CharacterClass, PasswordGenerator};
use crate::models::{PasswordOptions, PasswordStrength};
use crate::strength::calculate_entropy;

/// Shown before the first generation so every improvement hint is visible.
pub const SAMPLE_PASSWORD: &str = "AAAAAAAA";

const ACK_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Generate,
    Evaluate,
    SetLength,
    ChooseClasses,
    ToggleAmbiguous,
    ToggleReveal,
    Copy,
    ToggleTheme,
    Exit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MenuAction::Generate => "🔐  Generate password",
            MenuAction::Evaluate => "🔍  Check a password",
            MenuAction::SetLength => "📏  Set length",
            MenuAction::ChooseClasses => "🔤  Choose character types",
            MenuAction::ToggleAmbiguous => "👓  Toggle ambiguous character exclusion",
            MenuAction::ToggleReveal => "👁️  Show/hide password",
            MenuAction::Copy => "📋  Copy password",
            MenuAction::ToggleTheme => "🌓  Switch theme",
            MenuAction::Exit => "❌  Exit",
        };
        f.write_str(text)
    }
}

const MENU: [MenuAction; 9] = [
    MenuAction::Generate,
    MenuAction::Evaluate,
    MenuAction::SetLength,
    MenuAction::ChooseClasses,
    MenuAction::ToggleAmbiguous,
    MenuAction::ToggleReveal,
    MenuAction::Copy,
    MenuAction::ToggleTheme,
    MenuAction::Exit,
];

/// Everything the interactive shell holds between prompts.
pub struct ShellState {
    pub options: PasswordOptions,
    pub password: String,
    pub strength: PasswordStrength,
    pub preferences: Preferences,
    preferences_path: PathBuf,
}

impl ShellState {
    pub fn new(options: PasswordOptions, preferences: Preferences, preferences_path: PathBuf) -> Self {
        let generator = PasswordGenerator::new();
        Self {
            options,
            password: SAMPLE_PASSWORD.to_string(),
            strength: generator.analyze_password_strength(SAMPLE_PASSWORD),
            preferences,
            preferences_path,
        }
    }

    /// Generate a new password if the options pass validation.
    /// Invalid options keep the current password.
    pub fn regenerate(&mut self, generator: &PasswordGenerator) -> bool {
        if !validate_password_options(&self.options) {
            log::warn!("Generation blocked by invalid options: {}", render_options(&self.options));
            return false;
        }

        self.password = generator.generate_password(&self.options);
        self.strength = generator.analyze_password_strength(&self.password);
        true
    }

    pub fn set_classes(&mut self, classes: &[CharacterClass]) {
        self.options.include_uppercase = classes.contains(&CharacterClass::Uppercase);
        self.options.include_lowercase = classes.contains(&CharacterClass::Lowercase);
        self.options.include_numbers = classes.contains(&CharacterClass::Numbers);
        self.options.include_symbols = classes.contains(&CharacterClass::Symbols);
    }

    pub fn selected_class_indices(&self) -> Vec<usize> {
        let flags = [
            self.options.include_uppercase,
            self.options.include_lowercase,
            self.options.include_numbers,
            self.options.include_symbols,
        ];
        flags
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn toggle_theme(&mut self) {
        self.preferences.theme = self.preferences.theme.toggled();
        self.persist_preferences();
    }

    pub fn toggle_reveal(&mut self) {
        self.preferences.reveal_password = !self.preferences.reveal_password;
        self.persist_preferences();
    }

    fn persist_preferences(&self) {
        if let Err(e) = self.preferences.save(&self.preferences_path) {
            log::error!("Failed to save preferences: {}", e);
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.preferences.theme)
    }

    fn render(&self) {
        let palette = self.palette();
        println!();
        println!("{}", palette.muted.apply_to(render_options(&self.options)));
        println!(
            "Password: {}",
            palette.accent.apply_to(render_password(&self.password, self.preferences.reveal_password))
        );
        println!("{}", render_strength(&self.strength, calculate_entropy(&self.password), &palette));
        println!();
    }
}

fn acknowledge(message: &str) {
    let term = Term::stdout();
    println!("{}", console::style(message).green().bold());

    // Only a real terminal can take the line back
    if term.is_term() {
        thread::sleep(ACK_DURATION);
        let _ = term.clear_last_lines(1);
    }
}

fn prompt_length(current: usize) -> Result<usize, InquireError> {
    CustomType::<usize>::new("Password length:")
        .with_default(current)
        .with_help_message("Between 4 and 128 characters")
        .with_error_message("Please enter a whole number")
        .prompt()
}

fn prompt_classes(state: &ShellState) -> Result<Vec<CharacterClass>, InquireError> {
    let defaults = state.selected_class_indices();
    MultiSelect::new("Character types:", CharacterClass::ALL.to_vec())
        .with_default(&defaults)
        .with_help_message("Space to toggle, Enter to confirm")
        .prompt()
}

fn check_custom_password(palette: &Palette) -> Result<(), InquireError> {
    let password = Password::new("Password to check:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let generator = PasswordGenerator::new();
    let strength = generator.analyze_password_strength(&password);
    println!("{}", render_strength(&strength, calculate_entropy(&password), palette));
    Ok(())
}

// Escape on a sub-prompt just returns to the menu
fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled)
}

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> anyhow::Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSWORD FACTORY          ║");
    println!("╚══════════════════════════════════════╝");

    let preferences = Preferences::load(&config.preferences_file);
    let mut state = ShellState::new(config.initial_options(), preferences, config.preferences_file.clone());
    let generator = PasswordGenerator::new();
    let mut clipboard = ClipboardShell::new();

    while !should_exit.load(Ordering::SeqCst) {
        state.render();

        let selection = Select::new("Choose an option:", MENU.to_vec())
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .with_page_size(MENU.len())
            .prompt_skippable();

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let action = match selection {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let result: Result<(), InquireError> = match action {
            MenuAction::Generate => {
                if !state.regenerate(&generator) {
                    println!("⚠️  Select at least one character type and a length between 4 and 128.");
                }
                Ok(())
            }
            MenuAction::Evaluate => check_custom_password(&state.palette()),
            MenuAction::SetLength => prompt_length(state.options.length).map(|length| {
                state.options.length = length;
            }),
            MenuAction::ChooseClasses => prompt_classes(&state).map(|classes| {
                state.set_classes(&classes);
            }),
            MenuAction::ToggleAmbiguous => {
                state.options.exclude_ambiguous = !state.options.exclude_ambiguous;
                Ok(())
            }
            MenuAction::ToggleReveal => {
                state.toggle_reveal();
                Ok(())
            }
            MenuAction::Copy => {
                if clipboard.copy(&state.password, &mut io::stdout()) == Some(CopyOutcome::Clipboard) {
                    acknowledge("✅ Password copied to clipboard");
                }
                Ok(())
            }
            MenuAction::ToggleTheme => {
                state.toggle_theme();
                Ok(())
            }
            MenuAction::Exit => {
                let confirm = Confirm::new("Exit Password Factory?").with_default(true).prompt();
                match confirm {
                    Ok(true) => break,
                    Ok(false) => Ok(()),
                    Err(e) => Err(e),
                }
            }
        };

        if let Err(e) = result {
            if matches!(e, InquireError::OperationInterrupted) {
                break;
            }
            if !is_cancel(&e) {
                log::error!("Prompt failed: {}", e);
                println!("❌ {}", e);
            }
        }
    }

    log::info!("Interactive session finished");
    Ok(())
}
