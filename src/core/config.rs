// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{CharacterClass, ClassSet, GeneratorConfig};
use crate::notifier::ToastTiming;

// Configuration for the generator shell
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub default_classes: ClassSet,

    // Notifications
    pub toast_timing: ToastTiming,

    // Clipboard
    pub clipboard_hold: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_length: 12,
            min_length: 4,
            max_length: 50,
            default_classes: ClassSet::all(),

            // Notifications
            toast_timing: ToastTiming::default(),

            // Clipboard
            clipboard_hold: Duration::from_secs(10),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(length) = parse_var(&lookup, "PASSGEN_DEFAULT_LENGTH") {
            config.default_length = length;
        }

        if let Some(min) = parse_var(&lookup, "PASSGEN_MIN_LENGTH") {
            config.min_length = min;
        }

        if let Some(max) = parse_var(&lookup, "PASSGEN_MAX_LENGTH") {
            config.max_length = max;
        }

        if config.min_length > config.max_length {
            log::warn!(
                "PASSGEN_MIN_LENGTH ({}) exceeds PASSGEN_MAX_LENGTH ({}), swapping them",
                config.min_length, config.max_length
            );
            std::mem::swap(&mut config.min_length, &mut config.max_length);
        }

        if let Some(list) = lookup("PASSGEN_DEFAULT_CLASSES") {
            match parse_class_list(&list) {
                Ok(classes) if !classes.is_empty() => config.default_classes = classes,
                Ok(_) => log::warn!("PASSGEN_DEFAULT_CLASSES is empty, keeping all classes"),
                Err(e) => log::warn!("Ignoring PASSGEN_DEFAULT_CLASSES: {}", e),
            }
        }

        // Notifications
        let defaults = config.toast_timing;
        let fade_in = parse_var(&lookup, "PASSGEN_TOAST_FADE_MS").map(Duration::from_millis);
        let hold_until = parse_var(&lookup, "PASSGEN_TOAST_HOLD_MS").map(Duration::from_millis);
        let total = parse_var(&lookup, "PASSGEN_TOAST_TOTAL_MS").map(Duration::from_millis);
        config.toast_timing = ToastTiming::new(
            fade_in.unwrap_or(defaults.fade_in),
            hold_until.unwrap_or(defaults.hold_until),
            total.unwrap_or(defaults.total),
        );

        // Clipboard
        if let Some(secs) = parse_var(&lookup, "PASSGEN_CLIPBOARD_HOLD_SECS") {
            config.clipboard_hold = Duration::from_secs(secs);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Configuration used for the first password shown at startup.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.clamp_length(self.default_length),
            classes: self.default_classes,
        }
    }

    /// Keeps a requested length inside the shell's slider bounds.
    pub fn clamp_length(&self, length: usize) -> usize {
        length.clamp(self.min_length, self.max_length)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring unparsable {}='{}'", key, raw);
            None
        }
    }
}

/// Parses a comma separated list such as `upper,digits`.
pub fn parse_class_list(list: &str) -> Result<ClassSet, crate::models::UnknownClassError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(CharacterClass::from_str)
        .collect()
}
