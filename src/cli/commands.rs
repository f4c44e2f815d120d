// src/cli/commands.rs
use clap::Subcommand;

use crate::models::CharacterClass;

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Generate a single password
    Generate {
        /// Password length (kept within the configured bounds)
        #[arg(long, short)]
        length: Option<usize>,

        /// Character types to use: upper, lower, digits, special
        #[arg(long, short, value_delimiter = ',')]
        classes: Vec<CharacterClass>,

        /// Copy the password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Score an existing password
    Strength {
        /// Password to analyse
        #[arg(required = true)]
        password: String,
    },

    /// Interactive generator
    Menu,
}
