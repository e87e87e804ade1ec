use std::fmt;

use crate::core::constants::error_messages;

/// Error types for humanize operations
#[derive(Debug)]
pub enum HumanizeError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error (invalid config values)
    Config(String),

    /// No API key was configured; shown to the user as is
    MissingApiKey,

    /// HTTP transport error
    Http(reqwest::Error),

    /// The model provider answered with a failure status
    Remote { status: u16, message: String },

    /// The model provider answered without any text payload
    EmptyResponse,

    /// The payload did not conform to the declared response schema
    Schema(serde_json::Error),

    /// A schema-conformant payload carried an out-of-range value
    InvalidResult(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// Report export error
    Export(String),
}

impl fmt::Display for HumanizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumanizeError::Io(err) => write!(f, "IO error: {err}"),
            HumanizeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            HumanizeError::MissingApiKey => f.write_str(error_messages::MISSING_API_KEY),
            HumanizeError::Http(err) => write!(f, "HTTP error: {err}"),
            HumanizeError::Remote { status, message } => {
                write!(f, "Model API error ({status}): {message}")
            }
            HumanizeError::EmptyResponse => write!(f, "No response generated from AI."),
            HumanizeError::Schema(err) => write!(f, "Malformed analysis response: {err}"),
            HumanizeError::InvalidResult(msg) => write!(f, "Malformed analysis response: {msg}"),
            HumanizeError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            HumanizeError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            HumanizeError::Export(msg) => write!(f, "Report export error: {msg}"),
        }
    }
}

impl std::error::Error for HumanizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HumanizeError::Io(err) => Some(err),
            HumanizeError::Http(err) => Some(err),
            HumanizeError::Schema(err) => Some(err),
            HumanizeError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HumanizeError {
    fn from(err: std::io::Error) -> Self {
        HumanizeError::Io(err)
    }
}

impl From<reqwest::Error> for HumanizeError {
    fn from(err: reqwest::Error) -> Self {
        HumanizeError::Http(err)
    }
}

impl From<serde_json::Error> for HumanizeError {
    fn from(err: serde_json::Error) -> Self {
        HumanizeError::Schema(err)
    }
}

impl From<dialoguer::Error> for HumanizeError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) => HumanizeError::Io(io),
        }
    }
}

impl From<toml::de::Error> for HumanizeError {
    fn from(err: toml::de::Error) -> Self {
        HumanizeError::TomlParsing(err)
    }
}

/// Type alias for Results using HumanizeError
pub type Result<T> = std::result::Result<T, HumanizeError>;
