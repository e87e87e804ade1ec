//! Terminal rendering of analysis outcomes

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::{AnalysisResult, ScoreBand};
use crate::reporting::SavedReport;
use crate::session::AppState;
use crate::ui::color::{Colors, band_color, colorize, emphasize};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Self {
        if name == output_formats::JSON {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Width used for separators and wrapping
pub fn terminal_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(display::DEFAULT_WIDTH)
        .clamp(40, 120)
}

fn band_emoji(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::HumanLike => display::HUMAN_EMOJI,
        ScoreBand::MixedSignals => display::MIXED_EMOJI,
        ScoreBand::HighAiProbability => display::AI_EMOJI,
    }
}

/// Greedy word wrap with a leading indent on every line
fn wrap(text: &str, width: usize, indent: &str) -> String {
    let limit = width.saturating_sub(indent.len()).max(20);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > limit {
                lines.push(format!("{indent}{line}"));
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(format!("{indent}{line}"));
    }

    lines.join("\n")
}

fn section(title: &str, width: usize) -> String {
    format!(
        "\n{}\n{}\n",
        emphasize(title, Colors::BRIGHT_CYAN),
        colorize(&"─".repeat(width.min(60)), Colors::DIM)
    )
}

/// Text rendering of a result: score card, rewrites, then diagnostics
pub fn render_result_text(result: &AnalysisResult, width: usize) -> String {
    let band = result.band();
    let color = band_color(band);
    let mut out = String::new();

    out.push_str(&section("AI Flavor Detection", width));
    out.push_str(&format!(
        "{} Index {}/100  {}\n",
        band_emoji(band),
        emphasize(&result.display_score(), color),
        colorize(band.label(), color)
    ));
    out.push_str(&format!(
        "{}\n{}\n",
        colorize("Core Diagnosis:", Colors::DIM),
        wrap(&format!("\"{}\"", result.core_issue), width, "  ")
    ));

    out.push_str(&section("Humanized Reconstruction", width));
    out.push_str(&wrap(&result.full_rewritten_text, width, ""));
    out.push('\n');

    if !result.rewrites.is_empty() {
        out.push_str(&section("Detailed Changes", width));
        for (i, rewrite) in result.rewrites.iter().enumerate() {
            out.push_str(&format!(
                "{}. {}\n",
                i + 1,
                colorize(&format!("[{}]", rewrite.strategy), Colors::ORANGE)
            ));
            out.push_str(&format!(
                "   {} {}\n",
                colorize("AI Original:", Colors::BRIGHT_RED),
                colorize(&rewrite.original, Colors::STRIKE)
            ));
            out.push_str(&format!(
                "   {} {}\n",
                colorize("Humanized:", Colors::GREEN),
                rewrite.rewritten
            ));
        }
    }

    if !result.diagnostics.is_empty() {
        out.push_str(&section("Diagnostic Report", width));
        for item in &result.diagnostics {
            out.push_str(&format!(
                "• \"{}\"\n  {}\n{}\n",
                item.original,
                colorize(&item.violation, Colors::RED),
                wrap(&item.diagnosis, width, "  ")
            ));
        }
    }

    out
}

/// Pretty JSON rendering of a result
pub fn render_result_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One-line error rendering for the `Error` state
pub fn render_error(message: &str) -> String {
    format!(
        "{} {}",
        display::ERROR_EMOJI,
        colorize(message, Colors::BRIGHT_RED)
    )
}

/// Print the outcome held by `state`. Returns `true` for results.
pub fn print_outcome(state: &AppState, format: OutputFormat) -> Result<bool> {
    match state {
        AppState::Results(result) => {
            match format {
                OutputFormat::Json => println!("{}", render_result_json(result)?),
                OutputFormat::Text => print!("{}", render_result_text(result, terminal_width())),
            }
            Ok(true)
        }
        AppState::Error(message) => {
            eprintln!("{}", render_error(message));
            Ok(false)
        }
        AppState::Idle | AppState::Analyzing => Ok(false),
    }
}

pub fn render_report_saved(saved: &SavedReport) -> String {
    let mut line = format!(
        "{} Report saved to {}",
        display::REPORT_EMOJI,
        colorize(&saved.path.display().to_string(), Colors::BRIGHT_WHITE)
    );
    match saved.skipped_stylesheets {
        0 => {}
        1 => line.push_str(&colorize(
            " (1 stylesheet could not be embedded)",
            Colors::YELLOW,
        )),
        n => line.push_str(&colorize(
            &format!(" ({n} stylesheets could not be embedded)"),
            Colors::YELLOW,
        )),
    }
    line
}

/// Announce a saved report on stderr, keeping stdout for results
pub fn print_report_saved(saved: &SavedReport) {
    eprintln!("{}", render_report_saved(saved));
}

/// Note printed when a report export fails; the analysis itself succeeded
pub fn print_report_failed(message: &str) {
    eprintln!(
        "{} {}",
        display::MIXED_EMOJI,
        colorize(message, Colors::YELLOW)
    );
}
