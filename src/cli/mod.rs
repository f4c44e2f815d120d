// src/cli/mod.rs
use clap::Parser;
use std::sync::Arc;
use thiserror::Error;

pub mod clipboard;
pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::notifier::Notifier;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator with a strength meter", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level regardless of LOG_LEVEL
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Dispatches the parsed command line.
pub async fn run(args: Args, config: Config) -> Result<(), CliError> {
    let generator = PasswordGenerator::new();
    let notifier = Notifier::new(config.toast_timing)
        .with_observer(Arc::new(handlers::ConsoleToastObserver));

    match args.command.unwrap_or(CliCommand::Menu) {
        CliCommand::Generate { length, classes, copy } => {
            let generator_config = handlers::one_shot_config(&config, length, &classes);
            let outcome = handlers::handle_generate(&generator, &notifier, &generator_config);
            handlers::print_outcome(&outcome, args.json)?;
            if copy {
                let mut clipboard = clipboard::SystemClipboard::new(Some(config.clipboard_hold));
                handlers::handle_copy(outcome.password.as_str(), &mut clipboard, &notifier);
            }
        }
        CliCommand::Strength { password } => {
            let report = handlers::handle_strength(&password);
            handlers::print_strength(&report, args.json)?;
        }
        CliCommand::Menu => {
            menu::run_cli_menu(&config, &generator, &notifier)?;
        }
    }

    Ok(())
}
