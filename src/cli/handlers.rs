// src/cli/handlers.rs
use console::style;
use serde::Serialize;

use crate::cli::clipboard::ClipboardWriter;
use crate::cli::CliError;
use crate::core::config::Config;
use crate::generators::{analyze_password_strength, PasswordGenerator};
use crate::models::{CharacterClass, GenerationOutcome, GeneratorConfig, StrengthLabel, StrengthScore};
use crate::notifier::{Notifier, Toast, ToastObserver, ToastState};
use crate::utils::{render_strength, truncate_string};

pub const COPIED_MESSAGE: &str = "Password copied!";
pub const COPY_FAILED_MESSAGE: &str = "Could not access clipboard; select the password manually";

const TOAST_WIDTH: usize = 72;

/// Prints toasts to stderr as they are created.
pub struct ConsoleToastObserver;

impl ToastObserver for ConsoleToastObserver {
    fn on_transition(&self, toast: &Toast) {
        match toast.state {
            ToastState::Created => {
                eprintln!("{}", style(format!("💬 {}", truncate_string(&toast.message, TOAST_WIDTH))).cyan());
            }
            ToastState::Removed => log::debug!("toast {} dismissed", toast.id),
            _ => {}
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StrengthReport {
    pub score: StrengthScore,
    pub label: StrengthLabel,
}

/// Builds the configuration for `generate`, falling back to the configured
/// defaults for anything not given on the command line.
pub fn one_shot_config(config: &Config, length: Option<usize>, classes: &[CharacterClass]) -> GeneratorConfig {
    let requested = length.unwrap_or(config.default_length);
    let length = config.clamp_length(requested);
    if length != requested {
        log::info!("Length {} outside {}..={}, using {}", requested, config.min_length, config.max_length, length);
    }

    let classes = if classes.is_empty() {
        config.default_classes
    } else {
        classes.iter().copied().collect()
    };

    GeneratorConfig { length, classes }
}

/// Generates a password and forwards any fallback notice as a toast.
pub fn handle_generate(generator: &PasswordGenerator, notifier: &Notifier, config: &GeneratorConfig) -> GenerationOutcome {
    let outcome = generator.generate(config);
    if let Some(notice) = &outcome.notice {
        notifier.notify(notice.message());
    }
    outcome
}

pub fn handle_strength(password: &str) -> StrengthReport {
    let score = analyze_password_strength(password);
    StrengthReport { score, label: score.label() }
}

/// Copies the password. When that is not possible the password is printed
/// again so it can be selected by hand.
pub fn handle_copy(password: &str, clipboard: &mut dyn ClipboardWriter, notifier: &Notifier) {
    match clipboard.write_text(password) {
        Ok(()) => notifier.notify(COPIED_MESSAGE),
        Err(e) => {
            log::warn!("{}", e);
            println!("\n  {}\n", style(password).bold().underlined());
            notifier.notify(COPY_FAILED_MESSAGE);
        }
    }
}

pub fn format_outcome(outcome: &GenerationOutcome) -> String {
    format!(
        "Generated Password: {}\nStrength:           {}",
        style(outcome.password.as_str()).bold(),
        render_strength(outcome.score)
    )
}

pub fn print_outcome(outcome: &GenerationOutcome, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        println!("{}", format_outcome(outcome));
    }
    Ok(())
}

pub fn print_strength(report: &StrengthReport, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("Strength: {}", render_strength(report.score));
    }
    Ok(())
}
