//! Structured output schema declared to the model.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Top-level fields every response must carry
pub const REQUIRED_FIELDS: [&str; 5] = [
    "score",
    "coreIssue",
    "diagnostics",
    "rewrites",
    "fullRewrittenText",
];

/// Response schema in the Gemini `responseSchema` dialect.
pub static ANALYSIS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "NUMBER",
                "description": "AI Index Score from 0 (Human) to 100 (AI-heavy)."
            },
            "coreIssue": {
                "type": "STRING",
                "description": "The primary reason the text feels like AI (e.g., 'Overuse of nominalization')."
            },
            "diagnostics": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "original": { "type": "STRING" },
                        "violation": { "type": "STRING" },
                        "diagnosis": { "type": "STRING" }
                    },
                    "required": ["original", "violation", "diagnosis"]
                },
                "description": "List of specific text segments that violate human-centric writing."
            },
            "rewrites": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "original": { "type": "STRING" },
                        "rewritten": { "type": "STRING" },
                        "strategy": { "type": "STRING" }
                    },
                    "required": ["original", "rewritten", "strategy"]
                },
                "description": "Side-by-side comparison of original segments and their humanized versions."
            },
            "fullRewrittenText": {
                "type": "STRING",
                "description": "The complete text rewritten with a human voice."
            }
        },
        "required": REQUIRED_FIELDS
    })
});
