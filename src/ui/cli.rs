// Command-line interface definitions and parsing for humanize

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "humanize", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to analyze ("-" reads stdin)
    pub text: Option<String>,

    // Input
    /// Read the text to analyze from a file
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "text", help_heading = "Input")]
    pub file: Option<String>,

    /// Prompt for text and keep the session open
    #[arg(short = 'i', long, help_heading = "Input")]
    pub interactive: bool,

    // Model
    /// API key for the language model service
    #[arg(long, value_name = "KEY", env = "HUMANIZE_API_KEY", hide_env_values = true, help_heading = "Model")]
    pub api_key: Option<String>,

    /// Model name (default: gemini-3-pro-preview)
    #[arg(long, value_name = "NAME", help_heading = "Model")]
    pub model: Option<String>,

    /// Base URL of the generateContent API
    #[arg(long, value_name = "URL", help_heading = "Model")]
    pub endpoint: Option<String>,

    // Report
    /// Save an HTML report after a successful analysis
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = "", help_heading = "Report")]
    pub report: Option<String>,

    /// Extra stylesheet (file path or URL) embedded in reports
    #[arg(long = "stylesheet", value_name = "PATH", help_heading = "Report")]
    pub stylesheets: Vec<String>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable the progress spinner
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Install shell completions to standard location
    #[command(name = "completion-install", arg_required_else_help = true)]
    CompletionInstall {
        /// The shell to install completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Whether a report was requested, with or without a directory
    pub fn wants_report(&self) -> bool {
        self.report.is_some()
    }
}

/// Convert parsed arguments into the configuration overlay
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let report_dir = cli
        .report
        .as_deref()
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map(str::to_string);

    let stylesheets = if cli.stylesheets.is_empty() {
        None
    } else {
        Some(cli.stylesheets.clone())
    };

    CliConfig {
        model: cli.model.clone(),
        endpoint: cli.endpoint.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        report_dir,
        stylesheets,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["humanize"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_to_config_default() {
        let cli = parse(&["some text"]);
        let config = cli_to_config(&cli);

        assert_eq!(cli.text.as_deref(), Some("some text"));
        assert_eq!(config.model, None);
        assert_eq!(config.endpoint, None);
        assert_eq!(config.output_format, None);
        assert_eq!(config.report_dir, None);
        assert_eq!(config.stylesheets, None);
        assert!(!config.quiet);
        assert!(!config.verbose);
        assert!(!config.no_progress);
        assert!(!config.no_config);
        assert!(!cli.wants_report());
    }

    #[test]
    fn test_cli_to_config_all_options() {
        let cli = parse(&[
            "--model",
            "gemini-2.5-flash",
            "--endpoint",
            "http://localhost:9000",
            "--format",
            "json",
            "--report",
            "out",
            "--stylesheet",
            "a.css",
            "--stylesheet",
            "https://cdn.example.com/b.css",
            "-q",
            "-v",
            "--no-progress",
            "--config",
            "custom.toml",
            "--no-config",
            "text",
        ]);
        let config = cli_to_config(&cli);

        assert_eq!(config.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.output_format.as_deref(), Some("json"));
        assert_eq!(config.report_dir.as_deref(), Some("out"));
        assert_eq!(
            config.stylesheets,
            Some(vec!["a.css".to_string(), "https://cdn.example.com/b.css".to_string()])
        );
        assert!(config.quiet && config.verbose && config.no_progress && config.no_config);
        assert_eq!(config.config_file.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_report_flag_without_directory() {
        let cli = parse(&["--report", "--", "text"]);
        assert!(cli.wants_report());
        assert_eq!(cli_to_config(&cli).report_dir, None);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(Cli::try_parse_from(["humanize", "--format", "xml", "text"]).is_err());
    }

    #[test]
    fn test_file_conflicts_with_text() {
        assert!(Cli::try_parse_from(["humanize", "--file", "a.txt", "text"]).is_err());
    }

    #[test]
    fn test_completion_subcommand() {
        let cli = parse(&["completion-generate", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::CompletionGenerate {
                shell: clap_complete::Shell::Bash
            })
        ));
    }
}
