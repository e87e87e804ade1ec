//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments. The API key is not a
//! configuration key; it only comes from the CLI or the environment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{files, model, output_formats};
use crate::core::error::{HumanizeError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gemini model name
    pub model: Option<String>,

    /// Generative Language API base URL
    pub endpoint: Option<String>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Directory receiving exported HTML reports
    pub report_dir: Option<String>,

    /// Extra stylesheets attached to the report page (file paths or URLs)
    pub stylesheets: Option<Vec<String>>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Some(model::DEFAULT_MODEL.to_string()),
            endpoint: Some(model::DEFAULT_ENDPOINT.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            report_dir: None, // Current directory
            stylesheets: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HumanizeError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            HumanizeError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three of its parents
    pub fn load_from_dir(dir: &Path) -> Self {
        for level in 0..=files::CONFIG_PARENT_LEVELS {
            let mut candidate = dir.to_path_buf();
            for _ in 0..level {
                candidate.push("..");
            }
            candidate.push(files::CONFIG_FILE_NAME);

            if let Ok(config) = Self::load_from_file(&candidate) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref model) = cli_config.model {
            self.model = Some(model.clone());
        }
        if let Some(ref endpoint) = cli_config.endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref report_dir) = cli_config.report_dir {
            self.report_dir = Some(report_dir.clone());
        }
        if let Some(ref stylesheets) = cli_config.stylesheets {
            let mut merged = self.stylesheets.clone().unwrap_or_default();
            merged.extend(stylesheets.iter().cloned());
            self.stylesheets = Some(merged);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(model::DEFAULT_MODEL)
    }

    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(model::DEFAULT_ENDPOINT)
    }

    pub fn output_format_or_default(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Directory for exported reports, defaulting to the working directory
    pub fn report_dir_path(&self) -> PathBuf {
        self.report_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref model) = self.model
            && model.trim().is_empty()
        {
            return Err(HumanizeError::Config(
                "Model name cannot be empty.".to_string(),
            ));
        }

        if let Some(ref endpoint) = self.endpoint
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(HumanizeError::Config(format!(
                "Endpoint '{endpoint}' is not a valid URL. Expected it to start with http:// or https://."
            )));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(HumanizeError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref stylesheets) = self.stylesheets
            && stylesheets.iter().any(|sheet| sheet.trim().is_empty())
        {
            return Err(HumanizeError::Config(
                "Stylesheet entries cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Model
    pub model: Option<String>,    // --model
    pub endpoint: Option<String>, // --endpoint

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Report
    pub report_dir: Option<String>,       // --report
    pub stylesheets: Option<Vec<String>>, // --stylesheet

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
