//! reqgen configuration
//!
//! Handles loading of `.reqgen.yaml` from the working directory or an
//! explicit path. A missing file means defaults.

use crate::error::{Error, Result};
use crate::requirement::{default_category, Level};
use crate::validate::DEFAULT_MIN_TITLE_LENGTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name
pub const CONFIG_FILE: &str = ".reqgen.yaml";

const CONFIG_VERSION: u32 = 1;

/// Generator configuration (`.reqgen.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "reqgen configuration")]
pub struct GeneratorConfig {
    /// Schema version for migrations
    pub version: u32,

    /// Defaults applied to ingested requirements
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Repair pass settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for requirement fields the input does not provide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub priority: Level,

    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            priority: Level::default(),
            category: default_category(),
        }
    }
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationConfig {
    /// Titles shorter than this are prefixed with "Test Case: "
    #[serde(default = "default_min_title_length")]
    pub min_title_length: usize,
}

fn default_min_title_length() -> usize {
    DEFAULT_MIN_TITLE_LENGTH
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_title_length: default_min_title_length(),
        }
    }
}

/// How `generate` prints its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Report,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            defaults: DefaultsConfig::default(),
            validation: ValidationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and version-check a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_norway::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        if config.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load `.reqgen.yaml` from a directory, or defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let file = dir.join(CONFIG_FILE);
        if !file.exists() {
            tracing::debug!(path = %file.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&file)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}
