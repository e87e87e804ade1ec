use crate::config::Config;
use crate::core::types::AnalysisResult;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, has_api_key: bool) {
    info!(
        "Configuration: model={}, endpoint={}, format={}",
        config.model_or_default(),
        config.endpoint_or_default(),
        config.output_format_or_default()
    );
    info!(
        "Report: dir={}, extra_stylesheets={}",
        config.report_dir_path().display(),
        config.stylesheets.as_ref().map_or(0, Vec::len)
    );
    info!("Credential: api_key_present={has_api_key}");
}

/// Log the start of a remote analysis call
pub fn log_analysis_start(model: &str, char_count: usize) {
    info!("Starting analysis of {char_count} chars with {model}");
}

/// Log a completed remote analysis call
pub fn log_analysis_complete(result: &AnalysisResult, duration_ms: u128) {
    info!(
        "Analysis complete: score={} ({}), {} diagnostics, {} rewrites ({}ms)",
        result.display_score(),
        result.band(),
        result.diagnostics.len(),
        result.rewrites.len(),
        duration_ms
    );
}

/// Log a state machine transition
pub fn log_state_transition(from: &str, to: &str) {
    debug!("State: {from} -> {to}");
}

/// Log a skipped stylesheet during report export
pub fn log_stylesheet_skipped(source: &str, reason: &str) {
    warn!("Could not extract styles from sheet: {source} ({reason})");
}

/// Log a written report
pub fn log_report_written(path: &Path, bytes: usize) {
    info!("Report written to {} ({bytes} bytes)", path.display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            score: 55.0,
            core_issue: "Flat rhythm".to_string(),
            diagnostics: vec![],
            rewrites: vec![],
            full_rewritten_text: String::new(),
        }
    }

    #[test]
    fn test_logger_initialization_is_repeatable() {
        // try_init tolerates an already-installed logger
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default(), false);

        let config = Config {
            report_dir: Some("reports".to_string()),
            stylesheets: Some(vec!["a.css".to_string(), "b.css".to_string()]),
            ..Default::default()
        };
        log_config_info(&config, true);
    }

    #[test]
    fn test_log_analysis_lifecycle() {
        log_analysis_start("gemini-3-pro-preview", 0);
        log_analysis_start("gemini-3-pro-preview", 100_000);
        log_analysis_complete(&sample_result(), 0);
        log_analysis_complete(&sample_result(), 30_000);
    }

    #[test]
    fn test_log_state_transition() {
        log_state_transition("IDLE", "ANALYZING");
        log_state_transition("ANALYZING", "RESULTS");
    }

    #[test]
    fn test_log_report_events() {
        log_stylesheet_skipped("https://cdn.example.com/app.css", "remote stylesheet");
        log_report_written(Path::new("Humanize_AI_Report_x.html"), 2048);
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        log_error("Failed to read input", Some(&io_error));
        log_error("Something went wrong", None);
        log_warning("Warning with special chars: äöü ⚠️");
    }
}
