use clap::{CommandFactory, Parser};
use humanize::analysis::{GeminiClient, resolve_api_key};
use humanize::config::{CliConfig, Config};
use humanize::core::HumanizeError;
use humanize::core::constants::output_formats;
use humanize::reporting::logging;
use humanize::reporting::{RenderedPage, ReportExporter};
use humanize::session::Controller;
use humanize::ui::completion::{install_completion, print_completions};
use humanize::ui::output::{self, OutputFormat};
use humanize::ui::{Cli, Commands, InteractiveSession, ProgressReporter, cli_to_config};

use std::io::Read;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_humanize_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        Some(Commands::CompletionInstall { shell }) => match install_completion(shell) {
            Ok(message) => {
                println!("{message}");
                Some(0)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Some(1)
            }
        },
        None => None,
    }
}

/// One analysis (or an interactive session) from parsed arguments to exit code
pub async fn run_humanize_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config, resolve_api_key(cli.api_key.as_deref()).is_some());

    // A missing key is reported by the analysis itself, not here
    let client = GeminiClient::from_config(&config, cli.api_key.as_deref())?;
    let page = RenderedPage::new().with_stylesheets(config.stylesheets.clone().unwrap_or_default());
    let report_dir = config.report_dir_path();

    if cli.interactive {
        InteractiveSession::new(&client, page, client.model(), &report_dir)
            .with_format(output_settings.format)
            .with_progress(output_settings.show_progress)
            .run()
            .await?;
        return Ok(0);
    }

    let text = read_input(cli)?;
    let mut controller = Controller::new();
    controller.set_input(text);
    if !controller.can_submit() {
        eprintln!("Error: Nothing to analyze. The input text is empty.");
        return Ok(1);
    }

    let mut progress = ProgressReporter::new(output_settings.show_progress);
    progress.start_analysis(controller.input().chars().count(), client.model());
    controller.submit(&client).await;
    progress.finish_analysis(controller.result().is_some());

    let mut page = page;
    page.render(&controller, client.model());

    if !output::print_outcome(controller.state(), output_settings.format)? {
        return Ok(1);
    }

    if cli.wants_report() {
        match ReportExporter::export(&page, &report_dir) {
            Ok(saved) => output::print_report_saved(&saved),
            Err(e) => {
                output::print_report_failed(&e.to_string());
                return Ok(1);
            }
        }
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub format: OutputFormat,
    pub show_progress: bool,
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let format = OutputFormat::from_name(config.output_format_or_default());
    let show_progress = !quiet
        && !cli_config.no_progress
        && config.output_format_or_default() == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose,
        format,
        show_progress,
    }
}

/// Text from `--file`, the positional argument, or stdin for "-"
pub fn read_input(cli: &Cli) -> Result<String, HumanizeError> {
    if let Some(ref path) = cli.file {
        return std::fs::read_to_string(path).map_err(|e| {
            HumanizeError::InvalidArgument(format!("Could not read input file '{path}': {e}"))
        });
    }

    match cli.text.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(text) => Ok(text.to_string()),
        None => Err(HumanizeError::InvalidArgument(
            "No text provided. Pass TEXT, --file PATH, '-' for stdin, or --interactive."
                .to_string(),
        )),
    }
}
