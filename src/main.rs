//! ContentGuard - Audit content drafts against platform compliance rules
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use contentguard::cli::{self, exit_codes, Cli, Commands, GlobalOptions};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Handle exit codes for CI integration
    match run(cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let options = GlobalOptions::from(&cli);

    let code = match cli.command {
        Commands::Audit(args) => cli::commands::audit::execute(args, &options)?,
        Commands::Batch(args) => cli::commands::batch::execute(args, &options)?,
        Commands::Lexicon(args) => cli::commands::lexicon::execute(args, &options)?,
        Commands::Init(args) => cli::commands::init::execute(args)?,
    };

    Ok(code)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Reports go to stdout; keep logs on stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
