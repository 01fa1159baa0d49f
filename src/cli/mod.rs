//! # CLI Module
//!
//! This module defines the command-line interface for ContentGuard using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `audit` | Audit a single draft |
//! | `batch` | Audit a JSON array of drafts |
//! | `lexicon` | Print the effective lexicon as TOML |
//! | `init` | Initialize a new configuration file |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Report output formatters (Terminal, JSON, Markdown)
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `--lexicon <FILE>` - Lexicon file replacing the configured one
//!
//! ## Examples
//!
//! ```bash
//! # Audit a draft for a 百家号 account
//! contentguard audit --title "标题" --content-file draft.html --platform "百家号 - 财经号"
//!
//! # Audit every pending task exported from the dashboard
//! contentguard batch tasks.json --format json -o audit.json
//!
//! # Export the lexicon for editing
//! contentguard lexicon --output lexicon.toml
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{AuditArgs, BatchArgs, InitArgs, LexiconArgs};

/// ContentGuard - Audit content drafts against platform compliance rules
#[derive(Parser, Debug)]
#[command(name = "contentguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lexicon file (overrides the configured lexicon)
    #[arg(long, global = true, value_name = "FILE", env = "CONTENTGUARD_LEXICON")]
    pub lexicon: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a single draft
    Audit(AuditArgs),

    /// Audit a JSON array of drafts
    Batch(BatchArgs),

    /// Print the effective lexicon as TOML
    Lexicon(LexiconArgs),

    /// Initialize a new configuration file
    Init(InitArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub lexicon: Option<PathBuf>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            lexicon: cli.lexicon.clone(),
        }
    }
}
