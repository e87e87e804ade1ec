//! humanize: detect "AI flavor" in text and rewrite it with a human voice
//!
//! The crate is organized in layers:
//!
//! - [`core`]: result types, the error enum and constants
//! - [`analysis`]: the language-model client behind the [`Analyze`] trait
//! - [`session`]: the Idle/Analyzing/Results/Error state controller
//! - [`reporting`]: logging, the rendered page and the HTML report exporter
//! - [`config`]: TOML configuration merged with command-line overrides
//! - [`ui`]: CLI parsing, terminal output, progress and the interactive loop

pub mod analysis;
pub mod config;
pub mod core;
pub mod reporting;
pub mod session;
pub mod ui;

pub use analysis::{Analyze, GeminiClient};
pub use config::{CliConfig, Config};
pub use self::core::{AnalysisResult, DiagnosticItem, HumanizeError, Result, RewriteSection, ScoreBand};
pub use reporting::{RenderedPage, ReportExporter, SavedReport};
pub use session::{AppState, Controller};
