// src/cli/menu.rs
use inquire::{CustomType, InquireError, Select};

use crate::cli::clipboard::SystemClipboard;
use crate::cli::handlers::{format_outcome, handle_copy, handle_generate};
use crate::cli::CliError;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, GenerationOutcome, GeneratorConfig};
use crate::notifier::Notifier;

const REGENERATE: &str = "🔄  Generate password";
const SET_LENGTH: &str = "📏  Set length";
const CHARACTER_TYPES: &str = "🔤  Character types";
const COPY: &str = "📋  Copy password";
const QUIT: &str = "🚪  Quit";

pub fn run_cli_menu(config: &Config, generator: &PasswordGenerator, notifier: &Notifier) -> Result<(), CliError> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🦀 RUST PASSWORD GENERATOR     ║");
    println!("╚══════════════════════════════════════╝");

    let mut settings = config.generator_config();
    // Lives for the whole session so copied text stays available
    let mut clipboard = SystemClipboard::new(None);

    // A password is shown straight away with the default settings
    let mut current = handle_generate(generator, notifier, &settings);
    show(&current);

    loop {
        println!("{}", describe_settings(&settings));

        let choice = match Select::new("What next?", vec![REGENERATE, SET_LENGTH, CHARACTER_TYPES, COPY, QUIT]).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => QUIT,
            Err(e) => return Err(e.into()),
        };

        match choice {
            REGENERATE => {
                current = handle_generate(generator, notifier, &settings);
                show(&current);
            }
            SET_LENGTH => {
                let prompt = format!("Password length ({}-{}):", config.min_length, config.max_length);
                let requested = CustomType::<usize>::new(&prompt)
                    .with_default(settings.length)
                    .with_error_message("Please type a whole number")
                    .prompt()?;
                settings.length = config.clamp_length(requested);
            }
            CHARACTER_TYPES => {
                let options: Vec<String> = CharacterClass::ALL
                    .iter()
                    .map(|class| {
                        let mark = if settings.classes.contains(*class) { "[x]" } else { "[ ]" };
                        format!("{} {}", mark, class.label())
                    })
                    .collect();

                let picked = Select::new("Toggle a character type:", options).raw_prompt()?;
                if let Some(notice) = settings.classes.toggle(CharacterClass::ALL[picked.index]) {
                    notifier.notify(notice.message());
                }
            }
            COPY => {
                handle_copy(current.password.as_str(), &mut clipboard, notifier);
            }
            _ => break,
        }
    }

    log::info!("Leaving interactive generator");
    Ok(())
}

fn show(outcome: &GenerationOutcome) {
    println!("\n{}\n", format_outcome(outcome));
}

fn describe_settings(settings: &GeneratorConfig) -> String {
    let classes: Vec<&str> = settings.classes.iter().map(CharacterClass::cli_name).collect();
    format!("Length {} · {}", settings.length, classes.join(", "))
}
