use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use rust_passgen::cli::{self, Args};
use rust_passgen::core::config::Config;
use rust_passgen::logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::load();
    if args.verbose {
        config.log_level = LevelFilter::Debug;
    }

    if let Err(e) = logging::init(config.log_level, config.log_file.as_deref()) {
        eprintln!("⚠️ Could not set up logging: {}", e);
    }

    log::info!("🔐 Starting password generator");
    log::debug!("Loaded config: {:?}", config);

    match cli::run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
