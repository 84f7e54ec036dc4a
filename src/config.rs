//! # Parser Configuration
//!
//! Configuration options for ingredient parsing, with defaults, validation, and
//! loading from environment variables (optionally through a `.env` file).

use crate::errors::{ParseError, Result};
use crate::ingredient_model::Language;
use anyhow::Context;
use std::env;
use std::path::Path;
use tracing::debug;
use unic_langid::LanguageIdentifier;

pub const DEFAULT_MAX_INGREDIENT_LENGTH: usize = 100;
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1024;

pub const ENV_LANGUAGE: &str = "INGREDIENT_PARSER_LANGUAGE";
pub const ENV_POSTPROCESSING: &str = "INGREDIENT_PARSER_POSTPROCESSING";
pub const ENV_MAX_INGREDIENT_LENGTH: &str = "INGREDIENT_PARSER_MAX_INGREDIENT_LENGTH";
pub const ENV_MAX_INPUT_LENGTH: &str = "INGREDIENT_PARSER_MAX_INPUT_LENGTH";

/// Configuration options for ingredient parsing
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Preferred vocabulary for aliases registered in several languages ("T")
    pub language: Option<Language>,
    /// Whether to enable ingredient name post-processing (cleaning, normalization)
    pub enable_ingredient_postprocessing: bool,
    /// Maximum length for ingredient names, in characters (truncated if longer)
    pub max_ingredient_length: usize,
    /// Maximum parsed input length, in bytes (longer input is truncated)
    pub max_input_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            language: None,
            enable_ingredient_postprocessing: true,
            max_ingredient_length: DEFAULT_MAX_INGREDIENT_LENGTH,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_ingredient_length == 0 {
            return Err(ParseError::Config(
                "max_ingredient_length cannot be 0".to_string(),
            ));
        }
        if self.max_input_length == 0 {
            return Err(ParseError::Config("max_input_length cannot be 0".to_string()));
        }
        if self.max_ingredient_length > self.max_input_length {
            return Err(ParseError::Config(format!(
                "max_ingredient_length ({}) cannot exceed max_input_length ({})",
                self.max_ingredient_length, self.max_input_length
            )));
        }
        Ok(())
    }

    /// Load configuration from the environment, reading a `.env` file first if present
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_current_env()
    }

    /// Load configuration from a specific env file, then the environment
    pub fn from_env_file(path: &Path) -> anyhow::Result<Self> {
        dotenv::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        Self::from_current_env()
    }

    fn from_current_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(tag) = env::var(ENV_LANGUAGE) {
            config.language = Some(
                parse_language_tag(&tag)
                    .with_context(|| format!("Invalid {ENV_LANGUAGE} value '{tag}'"))?,
            );
        }

        if let Ok(value) = env::var(ENV_POSTPROCESSING) {
            config.enable_ingredient_postprocessing = parse_bool(&value)
                .with_context(|| format!("Invalid {ENV_POSTPROCESSING} value '{value}'"))?;
        }

        if let Ok(value) = env::var(ENV_MAX_INGREDIENT_LENGTH) {
            config.max_ingredient_length = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_MAX_INGREDIENT_LENGTH} value '{value}'"))?;
        }

        if let Ok(value) = env::var(ENV_MAX_INPUT_LENGTH) {
            config.max_input_length = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_MAX_INPUT_LENGTH} value '{value}'"))?;
        }

        config.validate()?;
        debug!(
            language = ?config.language,
            postprocessing = config.enable_ingredient_postprocessing,
            max_ingredient_length = config.max_ingredient_length,
            max_input_length = config.max_input_length,
            "Loaded parser configuration from environment"
        );
        Ok(config)
    }
}

/// Map a BCP-47 tag ("de", "de-AT", "fr_CA") to a supported vocabulary
pub fn parse_language_tag(tag: &str) -> anyhow::Result<Language> {
    let langid: LanguageIdentifier = tag.trim().replace('_', "-").parse()?;
    Language::from_code(langid.language.as_str())
        .ok_or_else(|| anyhow::anyhow!("Unsupported language '{}'", langid.language))
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{other}'"),
    }
}
