// src/cli/render.rs
//! Terminal presentation of options, passwords and strength reports.
use console::Style;

use crate::core::preferences::Theme;
use crate::models::{PasswordOptions, PasswordStrength, StrengthLevel};
use crate::utils::{format_entropy, mask_password, strength_meter};

const METER_WIDTH: usize = 20;

pub struct Palette {
    weak: Style,
    fair: Style,
    good: Style,
    strong: Style,
    pub accent: Style,
    pub muted: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                weak: Style::new().red().bold(),
                fair: Style::new().yellow().bold(),
                good: Style::new().cyan().bold(),
                strong: Style::new().green().bold(),
                accent: Style::new().blue().bold(),
                muted: Style::new().dim(),
            },
            Theme::Dark => Self {
                weak: Style::new().red().bright().bold(),
                fair: Style::new().yellow().bright().bold(),
                good: Style::new().cyan().bright().bold(),
                strong: Style::new().green().bright().bold(),
                accent: Style::new().magenta().bright().bold(),
                muted: Style::new().white(),
            },
        }
    }

    pub fn level(&self, level: StrengthLevel) -> &Style {
        match level {
            StrengthLevel::Weak => &self.weak,
            StrengthLevel::Fair => &self.fair,
            StrengthLevel::Good => &self.good,
            StrengthLevel::Strong => &self.strong,
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

pub fn render_options(options: &PasswordOptions) -> String {
    format!(
        "Length: {} | Uppercase: {} | Lowercase: {} | Numbers: {} | Symbols: {} | Exclude ambiguous: {}",
        options.length,
        on_off(options.include_uppercase),
        on_off(options.include_lowercase),
        on_off(options.include_numbers),
        on_off(options.include_symbols),
        on_off(options.exclude_ambiguous),
    )
}

pub fn render_password(password: &str, reveal: bool) -> String {
    if reveal {
        password.to_string()
    } else {
        mask_password(password)
    }
}

pub fn render_strength(strength: &PasswordStrength, entropy: f64, palette: &Palette) -> String {
    let style = palette.level(strength.level);
    let mut lines = vec![
        format!(
            "Strength: {} {} {}/100",
            style.apply_to(strength.level.label()),
            style.apply_to(strength_meter(strength.score, METER_WIDTH)),
            strength.score,
        ),
        format!(
            "Time to crack: {} {}",
            strength.crack_time,
            palette.muted.apply_to(format!("({})", format_entropy(entropy))),
        ),
    ];

    lines.extend(strength.feedback.iter().map(|hint| format!("  • {}", hint)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::{calculate_entropy, evaluate_password_strength};

    #[test]
    fn password_is_masked_unless_revealed() {
        assert_eq!(render_password("secret", true), "secret");
        assert_eq!(render_password("secret", false).chars().count(), 6);
        assert!(!render_password("secret", false).contains("secret"));
    }

    #[test]
    fn options_summary_lists_every_toggle() {
        let summary = render_options(&PasswordOptions::default());
        assert!(summary.starts_with("Length: 16"));
        assert!(summary.contains("Exclude ambiguous: off"));
    }

    #[test]
    fn strength_report_contains_feedback() {
        console::set_colors_enabled(false);
        let strength = evaluate_password_strength("password");
        let report = render_strength(&strength, calculate_entropy("password"), &Palette::for_theme(Theme::Dark));

        assert!(report.contains("Weak"));
        assert!(report.contains("Time to crack: seconds"));
        assert!(report.contains("Avoid common password patterns"));
    }
}
