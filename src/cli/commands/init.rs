//! Init command - Initialize a new configuration file

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Confirm;
use std::fs;
use std::path::{Path, PathBuf};

use super::InitArgs;
use crate::cli::exit_codes;
use crate::config::loader::CONFIG_FILENAME;
use crate::config::Config;
use crate::lexicon::Lexicon;

const LEXICON_FILENAME: &str = "lexicon.toml";

pub fn execute(args: InitArgs) -> Result<i32> {
    init_in(Path::new("."), args)
}

/// Write the configuration (and optionally the lexicon) into `dir`
pub fn init_in(dir: &Path, args: InitArgs) -> Result<i32> {
    let config_path = dir.join(CONFIG_FILENAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        if args.non_interactive {
            eprintln!(
                "{} Configuration file already exists. Use --force to overwrite.",
                "Error:".red().bold()
            );
            return Ok(exit_codes::INVALID_ARGS);
        }

        let overwrite = Confirm::new()
            .with_prompt("Configuration file already exists. Overwrite?")
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(exit_codes::SUCCESS);
        }
    }

    let mut config = Config::default();
    config.default_platform = args.platform;

    if args.with_lexicon {
        let lexicon_path = dir.join(LEXICON_FILENAME);
        fs::write(&lexicon_path, Lexicon::embedded_toml())
            .with_context(|| format!("Failed to write {}", lexicon_path.display()))?;
        config.lexicon = Some(PathBuf::from(LEXICON_FILENAME));
        println!(
            "{} Created {}",
            "Success:".green().bold(),
            LEXICON_FILENAME.cyan()
        );
    }

    let config_content = config.to_toml()?;
    fs::write(&config_path, &config_content).context("Failed to write configuration file")?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        CONFIG_FILENAME.cyan()
    );

    println!("\nNext steps:");
    println!("  1. Review and customize {}", CONFIG_FILENAME.cyan());
    println!(
        "  2. Run {} to check a draft",
        "contentguard audit --title <TITLE> --content-file <FILE>".cyan()
    );

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(force: bool) -> InitArgs {
        InitArgs {
            platform: Some("百家号 - 财经号".to_string()),
            with_lexicon: false,
            force,
            non_interactive: true,
        }
    }

    #[test]
    fn test_init_writes_config() {
        let temp_dir = TempDir::new().unwrap();
        let code = init_in(temp_dir.path(), args(false)).unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        let config = Config::load_from_file(&temp_dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.default_platform.as_deref(), Some("百家号 - 财经号"));
        assert_eq!(config.limits.title_max_chars, 30);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        init_in(temp_dir.path(), args(false)).unwrap();

        let code = init_in(temp_dir.path(), args(false)).unwrap();
        assert_eq!(code, exit_codes::INVALID_ARGS);

        let code = init_in(temp_dir.path(), args(true)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_init_with_lexicon() {
        let temp_dir = TempDir::new().unwrap();
        let mut init_args = args(false);
        init_args.with_lexicon = true;
        init_in(temp_dir.path(), init_args).unwrap();

        let config = Config::load_from_file(&temp_dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(
            config.lexicon_path(),
            Some(temp_dir.path().join(LEXICON_FILENAME))
        );
        assert!(config.load_lexicon().is_ok());
    }
}
