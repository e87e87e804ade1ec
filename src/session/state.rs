use std::fmt;

use crate::core::types::AnalysisResult;

/// Which view the application is in.
///
/// The result exists only in `Results` and the message only in `Error`,
/// so "analyzing with an error" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppState {
    #[default]
    Idle,
    Analyzing,
    Results(AnalysisResult),
    Error(String),
}

impl AppState {
    pub fn name(&self) -> &'static str {
        match self {
            AppState::Idle => "IDLE",
            AppState::Analyzing => "ANALYZING",
            AppState::Results(_) => "RESULTS",
            AppState::Error(_) => "ERROR",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, AppState::Idle)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, AppState::Analyzing)
    }

    /// States from which a new analysis may start
    pub fn accepts_submission(&self) -> bool {
        matches!(self, AppState::Idle | AppState::Error(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AppState::Results(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AppState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
