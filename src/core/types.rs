use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::score;
use crate::core::error::{HumanizeError, Result};

/// A flagged excerpt of the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticItem {
    /// Verbatim excerpt from the input
    pub original: String,
    /// Violation category, e.g. "Syntactic: Rhythm Consistency"
    pub violation: String,
    /// Free-text explanation
    pub diagnosis: String,
}

/// A rewritten excerpt and the technique that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteSection {
    pub original: String,
    pub rewritten: String,
    /// Rewriting technique, e.g. "POV Injection"
    pub strategy: String,
}

/// Structured outcome of one analysis call.
///
/// Every field is required on the wire; a payload missing any of them is
/// rejected by deserialization instead of being defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// AI index from 0 (human) to 100 (AI-heavy)
    pub score: f64,
    pub core_issue: String,
    pub diagnostics: Vec<DiagnosticItem>,
    pub rewrites: Vec<RewriteSection>,
    pub full_rewritten_text: String,
}

impl AnalysisResult {
    /// Parse a model payload, failing closed on anything but a complete result.
    pub fn from_json(payload: &str) -> Result<Self> {
        let result: AnalysisResult = serde_json::from_str(payload)?;
        result.validate()?;
        Ok(result)
    }

    /// Check value ranges the schema itself cannot express.
    pub fn validate(&self) -> Result<()> {
        if !self.score.is_finite() || !(score::MIN..=score::MAX).contains(&self.score) {
            return Err(HumanizeError::InvalidResult(format!(
                "score {} is outside the range {}-{}",
                self.score,
                score::MIN,
                score::MAX
            )));
        }
        Ok(())
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Score as displayed: integral scores print without a fraction.
    pub fn display_score(&self) -> String {
        if self.score.fract() == 0.0 {
            format!("{}", self.score as i64)
        } else {
            format!("{:.1}", self.score)
        }
    }
}

/// Coarse bucket of the AI index used for labels and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    HumanLike,
    MixedSignals,
    HighAiProbability,
}

impl ScoreBand {
    pub fn from_score(value: f64) -> Self {
        if value > score::HIGH_THRESHOLD {
            ScoreBand::HighAiProbability
        } else if value > score::MIXED_THRESHOLD {
            ScoreBand::MixedSignals
        } else {
            ScoreBand::HumanLike
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::HumanLike => "Human-Like",
            ScoreBand::MixedSignals => "Mixed Signals",
            ScoreBand::HighAiProbability => "High AI Probability",
        }
    }

    /// Short name used for CSS class suffixes
    pub fn css_name(&self) -> &'static str {
        match self {
            ScoreBand::HumanLike => "human",
            ScoreBand::MixedSignals => "mixed",
            ScoreBand::HighAiProbability => "ai",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
