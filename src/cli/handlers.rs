// src/cli/handlers.rs
use std::io::{self, Write};

use anyhow::Context;
use inquire::{Password, PasswordDisplayMode};
use serde::Serialize;

use crate::cli::clipboard::{copy_with_fallback, one_shot_copy_message, ClipboardShell, CopyOutcome, TextClipboard};
use crate::cli::commands::ClassFlags;
use crate::cli::render::{render_options, render_strength, Palette};
use crate::core::config::Config;
use crate::generators::{generate_passwords, validate_password_options};
use crate::models::{PasswordOptions, PasswordStrength};
use crate::strength::{calculate_entropy, evaluate_password_strength};

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: PasswordStrength,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsCheck {
    pub valid: bool,
    pub options: PasswordOptions,
}

// Resolve generation options from flags, falling back to configured defaults
pub fn generation_options(config: &Config, length: Option<usize>, classes: &ClassFlags) -> PasswordOptions {
    let mut options = classes.to_options(length.unwrap_or(config.default_password_length));
    options.exclude_ambiguous |= config.default_password_exclude_ambiguous;
    options
}

pub fn handle_generate(
    config: &Config,
    options: &PasswordOptions,
    count: usize,
    copy: bool,
    json: bool,
    palette: &Palette,
) -> anyhow::Result<()> {
    if !options.any_class_selected() {
        log::info!("No character type selected, using all four");
    }

    let results: Vec<GeneratedPassword> = generate_passwords(options, count)
        .into_iter()
        .map(|password| {
            let strength = evaluate_password_strength(&password);
            GeneratedPassword { password, strength }
        })
        .collect();

    log::info!(
        "Generated {} password(s) with length {} (default {})",
        results.len(),
        options.length,
        config.default_password_length
    );

    let mut clipboard = ClipboardShell::new();
    let stdout = io::stdout();
    let stderr = io::stderr();
    write_generated(
        &results,
        options,
        copy.then_some(&mut clipboard),
        json,
        palette,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Print generated passwords and optionally copy the last one.
///
/// In JSON mode `out` carries only the JSON document; the manual-selection
/// fallback goes to `err` instead.
pub fn write_generated<C, O, E>(
    results: &[GeneratedPassword],
    options: &PasswordOptions,
    clipboard: Option<&mut C>,
    json: bool,
    palette: &Palette,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<()>
where
    C: TextClipboard,
    O: Write,
    E: Write,
{
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(results).context("Failed to serialize passwords")?)?;
    } else {
        writeln!(out, "{}", palette.muted.apply_to(render_options(options)))?;
        for result in results {
            writeln!(out)?;
            writeln!(out, "{}", palette.accent.apply_to(&result.password))?;
            writeln!(out, "{}", render_strength(&result.strength, calculate_entropy(&result.password), palette))?;
        }
    }

    if let (Some(clipboard), Some(last)) = (clipboard, results.last()) {
        if json {
            copy_with_fallback(clipboard, &last.password, err);
        } else if copy_with_fallback(clipboard, &last.password, out) == Some(CopyOutcome::Clipboard) {
            writeln!(out, "{}", one_shot_copy_message())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn prompt_for_password() -> anyhow::Result<String> {
    Password::new("Password to evaluate:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read password")
}

pub fn handle_evaluate(password: Option<String>, json: bool, palette: &Palette) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_for_password()?,
    };

    let strength = evaluate_password_strength(&password);
    log::info!("Evaluated password: level {}, score {}", strength.level, strength.score);

    if json {
        println!("{}", serde_json::to_string_pretty(&strength).context("Failed to serialize strength")?);
    } else {
        println!("{}", render_strength(&strength, calculate_entropy(&password), palette));
    }

    Ok(())
}

/// Returns whether the options pass validation.
pub fn handle_check_options(options: PasswordOptions, json: bool) -> anyhow::Result<bool> {
    let valid = validate_password_options(&options);

    if json {
        let check = OptionsCheck { valid, options };
        println!("{}", serde_json::to_string_pretty(&check).context("Failed to serialize check")?);
    } else if valid {
        println!("✅ Options are valid: {}", render_options(&options));
    } else {
        println!("❌ Options are invalid: {}", render_options(&options));
        println!("Select at least one character type and a length between 4 and 128.");
    }

    Ok(valid)
}
