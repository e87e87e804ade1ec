//! HTML views of the application state
//!
//! These produce the markup held by the rendered page: the header region
//! and the main region. The exporter never calls into this module; it only
//! copies whatever markup the page currently holds.

use crate::core::types::{AnalysisResult, DiagnosticItem, RewriteSection};
use crate::session::AppState;

/// Circle path used by the score ring (circumference 100)
const RING_PATH: &str = "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

/// Stylesheet attached to every rendered page
pub const APP_STYLESHEET: &str = r#"
:root {
    --ink: #1f2937;
    --accent: #f97316;
    --paper: #fffbf5;
    --muted: #6b7280;
    --border: #f3f4f6;
    --human: #16a34a;
    --mixed: #ca8a04;
    --ai: #dc2626;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: 'Inter', sans-serif; color: var(--ink); background: #f9fafb; }
.serif { font-family: 'Merriweather', serif; }
.app-header { padding: 2rem 1.5rem; border-bottom: 1px solid #e5e7eb; background: var(--paper); }
.app-header .inner { max-width: 64rem; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.app-header h1 { margin: 0; font-size: 1.5rem; }
.app-header .tagline { margin: 0; font-size: 0.875rem; color: var(--muted); }
.app-header .badge { font-size: 0.875rem; color: var(--muted); background: #fff; padding: 0.5rem 1rem; border-radius: 9999px; border: 1px solid var(--border); }
.card { background: #fff; border: 1px solid var(--border); border-radius: 0.75rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.input-section .intro { text-align: center; margin-bottom: 2.5rem; }
.input-section textarea { width: 100%; min-height: 16rem; padding: 1.5rem; border: none; font-size: 1.125rem; resize: none; }
.input-section .actions { display: flex; justify-content: space-between; align-items: center; padding: 0 1rem 0.5rem; }
.input-section .count { font-size: 0.75rem; color: #9ca3af; }
.button { background: var(--ink); color: #fff; padding: 0.75rem 2rem; border: none; border-radius: 0.75rem; font-weight: 500; }
.button[disabled] { opacity: 0.5; }
.error-card { margin-top: 1.5rem; background: #fef2f2; border: 1px solid #fee2e2; color: var(--ai); padding: 1rem; border-radius: 0.75rem; }
.report-bar { display: flex; justify-content: space-between; align-items: flex-end; border-bottom: 1px solid #e5e7eb; padding-bottom: 1rem; }
.score-card { display: flex; align-items: center; gap: 1.5rem; padding: 1.5rem; }
.score-ring { position: relative; width: 6rem; height: 6rem; }
.score-ring svg { width: 100%; height: 100%; }
.score-ring .track { stroke: var(--border); }
.score-ring .value { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; }
.score-ring .number { font-size: 1.5rem; font-weight: 700; }
.score-ring .caption { font-size: 10px; text-transform: uppercase; letter-spacing: 0.05em; color: #9ca3af; }
.band { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; border: 1px solid currentColor; }
.band-human, .stroke-human { color: var(--human); }
.band-mixed, .stroke-mixed { color: var(--mixed); }
.band-ai, .stroke-ai { color: var(--ai); }
.core-issue { flex: 1; border-left: 1px solid var(--border); padding-left: 1.5rem; }
.core-issue .label { font-size: 0.875rem; text-transform: uppercase; color: var(--muted); margin: 0 0 0.25rem; }
.core-issue .quote { font-size: 1.125rem; font-style: italic; margin: 0; }
.results-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
.full-text { background: var(--paper); border: 1px solid #ffedd5; border-radius: 0.75rem; padding: 2rem; white-space: pre-wrap; line-height: 1.75; }
.rewrite { display: flex; gap: 1rem; padding: 1.25rem; margin-bottom: 1rem; }
.rewrite .side { flex: 1; }
.rewrite .tag { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.05em; }
.rewrite .before .tag { color: #ef4444; }
.rewrite .before p { color: var(--muted); text-decoration: line-through; }
.rewrite .after .tag { color: var(--human); }
.rewrite .strategy { font-size: 10px; padding: 0.125rem 0.5rem; background: #ffedd5; color: #c2410c; border-radius: 9999px; }
.diagnostics table { width: 100%; border-collapse: collapse; font-size: 0.875rem; text-align: left; }
.diagnostics th { background: #f9fafb; color: var(--muted); padding: 0.75rem 1.5rem; }
.diagnostics td { padding: 1rem 1.5rem; border-top: 1px solid var(--border); }
.diagnostics .fragment { font-family: monospace; font-size: 0.75rem; }
.diagnostics .violation { color: var(--ai); font-weight: 500; }
.diagnostics .analysis { font-style: italic; color: #4b5563; }
"#;

/// Escape text for safe interpolation into HTML content and attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Header region, as outer markup
pub fn render_header(model: &str) -> String {
    format!(
        r#"<header class="app-header">
    <div class="inner">
        <div>
            <h1 class="serif">Humanize AI</h1>
            <p class="tagline">Text Architect &amp; De-Artificializer</p>
        </div>
        <div class="badge">Powered by {}</div>
    </div>
</header>"#,
        escape_html(model)
    )
}

/// Main region content for the given state and input text
pub fn render_main(state: &AppState, input: &str) -> String {
    match state {
        AppState::Results(result) => render_results(result),
        AppState::Idle | AppState::Analyzing | AppState::Error(_) => render_input(state, input),
    }
}

fn render_input(state: &AppState, input: &str) -> String {
    let analyzing = state.is_analyzing();
    let disabled = if analyzing || input.trim().is_empty() {
        " disabled"
    } else {
        ""
    };
    let button_label = if analyzing {
        "Analyzing..."
    } else {
        "De-Artificialize"
    };
    let error_card = state
        .error_message()
        .map(|message| {
            format!(
                r#"<div class="error-card" role="alert"><p>{}</p></div>"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="input-section">
    <div class="intro">
        <h2 class="serif">Is your text pre-cooked?</h2>
        <p>Paste your content below. Our engine will detect "AI flavor", diagnose structural rigidity, and infuse it with human warmth.</p>
    </div>
    <div class="card">
        <textarea class="serif" spellcheck="false" placeholder="Paste your text here (e.g., generated emails, articles, reports)...">{}</textarea>
        <div class="actions">
            <span class="count">{} chars</span>
            <button class="button"{}>{}</button>
        </div>
    </div>
    {}
</section>"#,
        escape_html(input),
        input.chars().count(),
        disabled,
        button_label,
        error_card
    )
}

fn render_results(result: &AnalysisResult) -> String {
    format!(
        r#"<div class="results">
    <div class="report-bar">
        <h2>Analysis Report</h2>
    </div>
    {}
    <div class="results-grid">
        <div>{}</div>
        <div>{}</div>
    </div>
</div>"#,
        render_score_card(result),
        render_rewrites(result),
        render_diagnostics(&result.diagnostics)
    )
}

/// Score ring, band label and core diagnosis
pub fn render_score_card(result: &AnalysisResult) -> String {
    let band = result.band();
    format!(
        r#"<div class="card score-card">
    <div class="score-ring">
        <svg viewBox="0 0 36 36">
            <path class="track" d="{RING_PATH}" fill="none" stroke="currentColor" stroke-width="3"/>
            <path class="stroke-{css}" stroke-dasharray="{score}, 100" d="{RING_PATH}" fill="none" stroke="currentColor" stroke-width="3"/>
        </svg>
        <div class="value">
            <span class="number">{score}</span>
            <span class="caption">Index</span>
        </div>
    </div>
    <div>
        <h3>AI Flavor Detection</h3>
        <span class="band band-{css}">{label}</span>
    </div>
    <div class="core-issue">
        <p class="label">Core Diagnosis</p>
        <p class="quote serif">"{issue}"</p>
    </div>
</div>"#,
        css = band.css_name(),
        score = result.display_score(),
        label = band.label(),
        issue = escape_html(&result.core_issue),
    )
}

/// Humanized reconstruction: full text followed by the detailed changes
pub fn render_rewrites(result: &AnalysisResult) -> String {
    let changes: String = result.rewrites.iter().map(render_rewrite).collect();

    format!(
        r#"<div class="rewrites">
    <h3 class="serif">Humanized Reconstruction</h3>
    <h4>Full Text</h4>
    <div class="full-text serif">{}</div>
    <h4>Detailed Changes</h4>
    {}
</div>"#,
        escape_html(&result.full_rewritten_text),
        changes
    )
}

fn render_rewrite(section: &RewriteSection) -> String {
    format!(
        r#"<div class="card rewrite">
        <div class="side before"><div class="tag">AI Original</div><p>{}</p></div>
        <div class="side after"><div class="tag">Humanized</div><span class="strategy">{}</span><p class="serif">{}</p></div>
    </div>
    "#,
        escape_html(&section.original),
        escape_html(&section.strategy),
        escape_html(&section.rewritten)
    )
}

/// Diagnostic table; empty when there is nothing to report
pub fn render_diagnostics(items: &[DiagnosticItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<tr><td class="fragment">"{}"</td><td class="violation">{}</td><td class="analysis">{}</td></tr>"#,
                escape_html(&item.original),
                escape_html(&item.violation),
                escape_html(&item.diagnosis)
            )
        })
        .collect();

    format!(
        r#"<div class="card diagnostics">
    <h3>Diagnostic Report</h3>
    <table>
        <thead><tr><th>Detected Fragment</th><th>Violation Type</th><th>Analysis</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>"#
    )
}
