/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values shared by the analysis client,
/// the session controller and the report exporter.
/// Output format constants
pub mod output_formats {
    /// Text output format - colored score card, diagnostics and rewrites
    pub const TEXT: &str = "text";
    /// JSON output format - the raw analysis result for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Remote model settings
pub mod model {
    /// Default Gemini model used for the analysis
    pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
    /// Default Generative Language API base URL
    pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
    /// API version path segment
    pub const API_VERSION: &str = "v1beta";
    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
    /// Sampling temperature, slightly high to favor varied rewriting
    pub const TEMPERATURE: f64 = 0.7;
    /// Mime type requested for structured output
    pub const RESPONSE_MIME_TYPE: &str = "application/json";
}

/// Credential lookup
pub mod credentials {
    /// Environment variables checked for the API key, in order
    pub const API_KEY_ENV_VARS: [&str; 3] = ["HUMANIZE_API_KEY", "GEMINI_API_KEY", "API_KEY"];
}

/// Score thresholds for the AI index
pub mod score {
    /// Lowest valid score
    pub const MIN: f64 = 0.0;
    /// Highest valid score
    pub const MAX: f64 = 100.0;
    /// Scores above this are at least "Mixed Signals"
    pub const MIXED_THRESHOLD: f64 = 40.0;
    /// Scores above this are "High AI Probability"
    pub const HIGH_THRESHOLD: f64 = 70.0;
}

/// Report export constants
pub mod report {
    /// Filename prefix for exported reports
    pub const FILENAME_PREFIX: &str = "Humanize_AI_Report_";
    /// Filename extension for exported reports
    pub const FILENAME_EXTENSION: &str = "html";
    /// Title prefix for exported reports
    pub const TITLE_PREFIX: &str = "Humanize AI Report";
    /// Web fonts used by the views, not necessarily present in the attached sheets
    pub const FONT_IMPORT: &str = "@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=Merriweather:ital,wght@0,300;0,400;0,700;1,400&display=swap');";
    /// Background applied to the exported body
    pub const BODY_BACKGROUND: &str = "#f9fafb";
    /// Classes of the main element wrapping the captured content
    pub const MAIN_CLASS: &str = "w-full max-w-5xl mx-auto px-4 sm:px-6 pt-10 space-y-12";
}

/// Error message constants
pub mod error_messages {
    /// Shown when no credential is configured
    pub const MISSING_API_KEY: &str =
        "API Key is missing. Please check your environment configuration.";
    /// Fallback when a failure carries no message
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";
}

/// Configuration file lookup
pub mod files {
    /// Configuration file name searched in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".humanize.toml";
    /// Number of parent directories searched for the configuration file
    pub const CONFIG_PARENT_LEVELS: usize = 3;
}

/// Display and formatting constants
pub mod display {
    /// Emoji for a human-like score
    pub const HUMAN_EMOJI: &str = "✅";
    /// Emoji for a mixed score
    pub const MIXED_EMOJI: &str = "⚠️";
    /// Emoji for a high AI score
    pub const AI_EMOJI: &str = "🤖";
    /// Emoji for errors
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for the exported report
    pub const REPORT_EMOJI: &str = "📄";
    /// Fallback terminal width when it cannot be detected
    pub const DEFAULT_WIDTH: usize = 80;
}
