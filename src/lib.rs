//! Password generator with a strength meter and a toast notification channel.
//!
//! The core is [`generators::PasswordGenerator`] and [`notifier::Notifier`];
//! both take and return plain data. The [`cli`] module is the terminal shell
//! built on top of them.
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod notifier;
pub mod utils;

pub use crate::generators::{analyze_password_strength, PasswordGenerator};
pub use crate::models::{
    CharacterClass, ClassSet, GeneratedPassword, GenerationOutcome, GeneratorConfig, Notice,
    StrengthLabel, StrengthScore,
};
pub use crate::notifier::{Notifier, ToastTiming};
