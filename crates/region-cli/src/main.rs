//! code-region CLI
//!
//! Embeds source code regions into markdown code blocks annotated with
//! `file=<path>[#<region>]`.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command.clone() else {
        // No command provided - show help hint
        println!("{} embeds source regions into docs", "code-region".green().bold());
        println!();
        println!("Run {} for available commands.", "code-region --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    execute_command(&cli, &cwd, command)
}

fn execute_command(cli: &Cli, cwd: &std::path::Path, command: Commands) -> Result<()> {
    match command {
        Commands::Render { document, output } => {
            let embedder = context::build_embedder(cli, cwd)?;
            commands::run_render(cwd, &embedder, &document, output.as_deref())
        }
        Commands::Check { paths, json } => {
            let embedder = context::build_embedder(cli, cwd)?;
            commands::run_check(cwd, &embedder, paths.as_slice(), json)
        }
        Commands::Extract { file, region } => commands::run_extract(cwd, &file, region.as_deref()),
    }
}
