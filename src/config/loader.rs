//! Configuration loader

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{ConfigError, ContentGuardError};
use crate::lexicon::Lexicon;

use super::{Limits, RuleConfig, RULE_IDS};

pub const CONFIG_FILENAME: &str = ".contentguard.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Lexicon file replacing the embedded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,

    /// Platform label used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_platform: Option<String>,

    /// Formatting limits
    #[serde(default)]
    pub limits: Limits,

    /// Rule overrides
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    /// Directory of the file this config was loaded from
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the working directory, then the user config
    /// directory, or return the default
    pub fn load_or_default() -> Result<Self, ContentGuardError> {
        let local = Path::new(CONFIG_FILENAME);
        if local.exists() {
            return Self::load_from_file(local);
        }

        if let Some(user_config) = user_config_path() {
            if user_config.exists() {
                return Self::load_from_file(&user_config);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ContentGuardError> {
        debug!(path = %path.display(), "Loading configuration");
        let content = fs::read_to_string(path).map_err(|e| {
            ContentGuardError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        let mut config: Config = toml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        for rule_id in config.rules.keys() {
            if !RULE_IDS.contains(&rule_id.as_str()) {
                warn!(rule = %rule_id, "Unknown rule id in configuration");
            }
        }

        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ContentGuardError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Check if a rule is enabled
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).map(|r| r.enabled).unwrap_or(true)
    }

    /// Path of the configured lexicon, resolved against the config file directory
    pub fn lexicon_path(&self) -> Option<PathBuf> {
        let path = self.lexicon.as_ref()?;
        match &self.base_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// Load the configured lexicon, or share the embedded one
    pub fn load_lexicon(&self) -> Result<Arc<Lexicon>, ContentGuardError> {
        match self.lexicon_path() {
            Some(path) => {
                debug!(path = %path.display(), "Loading lexicon");
                Ok(Arc::new(Lexicon::load_from_file(&path)?))
            }
            None => Ok(Lexicon::embedded()),
        }
    }
}

/// `<config dir>/contentguard/config.toml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("contentguard").join("config.toml"))
}
