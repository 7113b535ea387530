// src/cli/mod.rs
use clap::Parser;

pub mod clipboard;
pub mod commands;
pub mod handlers;
pub mod menu;
pub mod render;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords and score their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
