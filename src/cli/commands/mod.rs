//! CLI commands module

pub mod audit;
pub mod batch;
pub mod init;
pub mod lexicon;

use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::GlobalOptions;
use crate::config::Config;
use crate::error::{ContentGuardError, OutputError};
use crate::lexicon::Lexicon;
use crate::rules::engine::RulesEngine;

/// Arguments for the audit command
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Draft title (plain text)
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Draft body, may contain inline markup
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the draft body from a file
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<PathBuf>,

    /// Platform label, e.g. "百家号 - 财经号" (defaults to the configured platform)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Output format (terminal, json, markdown)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Include rule identifiers and platform flags in JSON output
    #[arg(long)]
    pub detailed: bool,

    /// Only check specific rule categories
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Skip specific rule categories
    #[arg(long, value_delimiter = ',')]
    pub skip: Option<Vec<String>>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file containing an array of drafts ({id, title, content, platform})
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "json")]
    pub format: BatchFormat,

    /// Only check specific rule categories
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Skip specific rule categories
    #[arg(long, value_delimiter = ',')]
    pub skip: Option<Vec<String>>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the lexicon command
#[derive(Args, Debug)]
pub struct LexiconArgs {
    /// Print the embedded lexicon verbatim, ignoring config and --lexicon
    #[arg(long)]
    pub embedded: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Default platform label written to the configuration
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Also write an editable copy of the embedded lexicon
    #[arg(long)]
    pub with_lexicon: bool,

    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Skip interactive prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Output format for the audit command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

/// Output format for the batch command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum BatchFormat {
    Terminal,
    Json,
}

/// Load configuration and lexicon and build the rules engine
pub fn load_engine(options: &GlobalOptions) -> Result<RulesEngine, ContentGuardError> {
    let config = match &options.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default()?,
    };

    let lexicon = match &options.lexicon {
        Some(path) => Arc::new(Lexicon::load_from_file(path)?),
        None => config.load_lexicon()?,
    };

    Ok(RulesEngine::new(config, lexicon))
}

/// Write rendered output to a file, or print it to stdout
pub fn write_output(output: Option<&Path>, rendered: &str) -> Result<(), ContentGuardError> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| {
                ContentGuardError::Output(OutputError::FileWrite {
                    path: path.display().to_string(),
                    source: e,
                })
            })?;
            eprintln!("Report written to: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
