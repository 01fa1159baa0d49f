//! Error types for ContentGuard
//!
//! The audit itself never fails. These errors cover the layers around it:
//! loading configuration and lexicons, reading drafts and writing reports.

use thiserror::Error;

/// Main error type for ContentGuard
#[derive(Error, Debug)]
pub enum ContentGuardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Lexicon loading errors
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Draft input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Report output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors raised while loading or writing the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised while loading a lexicon resource
#[derive(Error, Debug)]
pub enum LexiconError {
    /// Failed to read the lexicon file
    #[error("Failed to read lexicon '{path}': {source}")]
    FileRead {
        /// Path to the lexicon file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Lexicon file is not valid TOML for this schema
    #[error("Failed to parse lexicon '{path}': {source}")]
    Parse {
        /// Path (or resource name) of the lexicon
        path: String,
        /// The underlying TOML error
        source: toml::de::Error,
    },

    /// A scanned category has no trigger phrases
    #[error("Lexicon category '{category}' has no phrases")]
    EmptyCategory {
        /// Name of the empty category
        category: String,
    },

    /// A phrase, keyword or alias is empty or whitespace, so it would match any text
    #[error("Lexicon field '{field}' contains a blank entry")]
    BlankEntry {
        /// Dotted path of the offending field
        field: String,
    },

    /// Lexicon could not be serialized
    #[error("Failed to serialize lexicon: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised while reading drafts to audit
#[derive(Error, Debug)]
pub enum InputError {
    /// Failed to read a draft file
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        /// Path to the input file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Batch file is not a JSON array of drafts
    #[error("Invalid batch file: {0}")]
    InvalidBatch(#[from] serde_json::Error),
}

/// Errors raised while rendering or writing reports
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write the report file
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        /// Path to the output file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for ContentGuardError {
    fn from(err: toml::de::Error) -> Self {
        ContentGuardError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for ContentGuardError {
    fn from(err: toml::ser::Error) -> Self {
        ContentGuardError::Config(ConfigError::Serialize(err))
    }
}

impl From<serde_json::Error> for ContentGuardError {
    fn from(err: serde_json::Error) -> Self {
        ContentGuardError::Output(OutputError::Json(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileRead {
            path: ".contentguard.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains(".contentguard.toml"));
    }

    #[test]
    fn test_lexicon_empty_category_display() {
        let err = ContentGuardError::from(LexiconError::EmptyCategory {
            category: "extreme".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Lexicon error: Lexicon category 'extreme' has no phrases"
        );
    }

    #[test]
    fn test_toml_error_converts_to_config_error() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: ContentGuardError = parse_err.into();
        assert!(matches!(err, ContentGuardError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_json_error_converts_to_output_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ContentGuardError = json_err.into();
        assert!(matches!(err, ContentGuardError::Output(OutputError::Json(_))));
    }
}
