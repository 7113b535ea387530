use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use password_factory::cli::handlers::{generation_options, handle_check_options, handle_evaluate, handle_generate};
use password_factory::cli::menu::run_cli_menu;
use password_factory::cli::render::Palette;
use password_factory::cli::{Args, CliCommand};
use password_factory::core::{Config, Preferences};
use password_factory::logging;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    match logging::init(&config) {
        Ok(()) => config.log_warnings(),
        Err(e) => {
            eprintln!("⚠️  Logging disabled: {}", e);
            for warning in &config.warnings {
                eprintln!("⚠️  {}", warning);
            }
        }
    }

    log::info!("🔐 Starting Password Factory");
    log::debug!("Command line args: {:?}", args.command);
    log::debug!("Loaded config: {:?}", config);

    let palette = Palette::for_theme(Preferences::load(&config.preferences_file).theme);

    match args.command {
        Some(CliCommand::Generate { length, classes, count, copy }) => {
            let options = generation_options(&config, length, &classes);
            handle_generate(&config, &options, count, copy, args.json, &palette)?;
        }
        Some(CliCommand::Evaluate { password }) => {
            handle_evaluate(password, args.json, &palette)?;
        }
        Some(CliCommand::CheckOptions { length, classes }) => {
            if !handle_check_options(classes.to_options(length), args.json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(CliCommand::Interactive) | None => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                if let Err(e) = ctrlc::set_handler(move || {
                    log::info!("🔴 Ctrl+C received. Initiating shutdown...");
                    should_exit.store(true, Ordering::SeqCst);
                }) {
                    log::warn!("Failed to set Ctrl+C handler: {}", e);
                }
            }

            run_cli_menu(&config, should_exit)?;
            println!("\n👋 Goodbye!");
        }
    }

    Ok(ExitCode::SUCCESS)
}
