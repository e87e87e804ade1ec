//! Remote analysis
//!
//! Request construction, the declared output schema and the client that
//! turns a model response into an `AnalysisResult`.

pub mod client;
pub mod prompt;
pub mod schema;

pub use client::{Analyze, GeminiClient, resolve_api_key};
