use crate::analysis::Analyze;
use crate::core::constants::error_messages;
use crate::core::error::Result;
use crate::core::types::AnalysisResult;
use crate::reporting::logging;
use crate::session::state::AppState;

/// Owns the input text and the application state, and performs every
/// state transition.
#[derive(Debug, Default)]
pub struct Controller {
    input: String,
    state: AppState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.state.result()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// Whether a submission right now would start an analysis
    pub fn can_submit(&self) -> bool {
        self.state.accepts_submission() && !self.input.trim().is_empty()
    }

    /// Move to `Analyzing` if allowed, returning the text to send.
    ///
    /// Blank input, or a state other than `Idle`/`Error`, leaves the
    /// controller untouched and returns `None`.
    pub fn begin_analysis(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.transition(AppState::Analyzing);
        Some(self.input.clone())
    }

    /// Apply the outcome of the in-flight call.
    ///
    /// Returns `false` when no call was in flight; the outcome is dropped.
    pub fn complete(&mut self, outcome: Result<AnalysisResult>) -> bool {
        if !self.state.is_analyzing() {
            logging::log_warning(&format!(
                "Ignoring analysis outcome delivered in state {}",
                self.state
            ));
            return false;
        }

        let next = match outcome {
            Ok(result) => AppState::Results(result),
            Err(error) => AppState::Error(user_message(&error)),
        };
        self.transition(next);
        true
    }

    /// Submit the current input: one call to `analyzer`, then the matching
    /// transition. Returns `false` when the submission was a no-op.
    pub async fn submit<A>(&mut self, analyzer: &A) -> bool
    where
        A: Analyze + ?Sized,
    {
        let Some(text) = self.begin_analysis() else {
            return false;
        };
        let outcome = analyzer.analyze(&text).await;
        self.complete(outcome)
    }

    /// Start over: clears result, error and input.
    ///
    /// Ignored while a call is in flight; only its outcome may leave `Analyzing`.
    pub fn reset(&mut self) {
        if self.state.is_analyzing() {
            logging::log_warning("Ignoring reset while an analysis is in flight");
            return;
        }
        self.input.clear();
        self.transition(AppState::Idle);
    }

    fn transition(&mut self, next: AppState) {
        logging::log_state_transition(self.state.name(), next.name());
        self.state = next;
    }
}

/// Message shown to the user for a failed analysis.
pub fn user_message(error: &dyn std::error::Error) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        error_messages::UNEXPECTED_ERROR.to_string()
    } else {
        message
    }
}
