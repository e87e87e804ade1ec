use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

use crate::analysis::prompt::{SYSTEM_INSTRUCTION, user_prompt};
use crate::analysis::schema::ANALYSIS_SCHEMA;
use crate::config::Config;
use crate::core::constants::{credentials, model};
use crate::core::error::{HumanizeError, Result};
use crate::core::types::AnalysisResult;
use crate::reporting::logging;

/// Anything that can turn text into an [`AnalysisResult`].
///
/// Implementations perform at most one remote call per invocation.
#[async_trait]
pub trait Analyze {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult>;
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
    temperature: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it carries any.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

/// Look up the API key: explicit value first, then the process environment.
pub fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| {
            credentials::API_KEY_ENV_VARS
                .iter()
                .find_map(|name| std::env::var(name).ok())
        })
        .filter(|key| !key.trim().is_empty())
}

/// Analysis client backed by the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, api_key: Option<String>) -> Result<Self> {
        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    /// Build a client from configuration; the key is resolved from the environment
    /// when `api_key` is `None`.
    pub fn from_config(config: &Config, api_key: Option<&str>) -> Result<Self> {
        Self::new(
            config.endpoint_or_default(),
            config.model_or_default(),
            resolve_api_key(api_key),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.endpoint,
            model::API_VERSION,
            self.model
        )
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: model::RESPONSE_MIME_TYPE,
                response_schema: &ANALYSIS_SCHEMA,
                temperature: model::TEMPERATURE,
            },
        }
    }

    async fn generate(&self, api_key: &str, text: &str) -> Result<AnalysisResult> {
        let prompt = user_prompt(text);
        let response = self
            .http
            .post(self.url())
            .header(model::API_KEY_HEADER, api_key)
            .json(&self.request_body(&prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| status.to_string());
            return Err(HumanizeError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let payload = serde_json::from_str::<GenerateContentResponse>(&body)?
            .text()
            .ok_or(HumanizeError::EmptyResponse)?;

        AnalysisResult::from_json(&payload)
    }
}

#[async_trait]
impl Analyze for GeminiClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            let error = HumanizeError::MissingApiKey;
            logging::log_error("Analysis aborted", Some(&error));
            return Err(error);
        };

        logging::log_analysis_start(&self.model, text.chars().count());
        let start_time = Instant::now();

        let outcome = self.generate(api_key, text).await;
        match &outcome {
            Ok(result) => logging::log_analysis_complete(result, start_time.elapsed().as_millis()),
            Err(error) => logging::log_error("Gemini analysis error", Some(error)),
        }
        outcome
    }
}


#[cfg(test)]
mod integration_tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::{Matcher, Server};

    const PATH: &str = "/v1beta/models/test-model:generateContent";

    fn wrap(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    fn example_payload() -> String {
        serde_json::json!({
            "score": 82,
            "coreIssue": "Excessive nominalization",
            "diagnostics": [{
                "original": "the implementation of the optimization was performed",
                "violation": "Lexical: Nominalization",
                "diagnosis": "Buries the action in noun form"
            }],
            "rewrites": [{
                "original": "the implementation of the optimization was performed successfully",
                "rewritten": "we optimized it successfully",
                "strategy": "Verb-Driven"
            }],
            "fullRewrittenText": "Honestly, we optimized it, and it worked."
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_analyze__parses_schema_conformant_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "secret")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(serde_json::json!({
                    "generationConfig": {
                        "responseMimeType": "application/json",
                        "temperature": 0.7
                    }
                })),
                Matcher::Regex("In conclusion, it was done\\.".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(wrap(&example_payload()))
            .expect(1)
            .create_async()
            .await;

        let client =
            GeminiClient::new(&server.url(), "test-model", Some("secret".to_string())).unwrap();
        let result = client.analyze("In conclusion, it was done.").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.score, 82.0);
        assert_eq!(result.core_issue, "Excessive nominalization");
        assert_eq!(result.rewrites[0].strategy, "Verb-Driven");
    }

    #[tokio::test]
    async fn test_analyze__missing_key_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .expect(0)
            .create_async()
            .await;

        let client = GeminiClient::new(&server.url(), "test-model", None).unwrap();
        let err = client.analyze("some text").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, HumanizeError::MissingApiKey));
        assert!(err.to_string().contains("API Key is missing"));
    }

    #[tokio::test]
    async fn test_analyze__empty_response() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[]}}]}"#)
            .create_async()
            .await;

        let client =
            GeminiClient::new(&server.url(), "test-model", Some("k".to_string())).unwrap();
        let err = client.analyze("some text").await.unwrap_err();

        assert!(matches!(err, HumanizeError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_analyze__missing_required_field() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(wrap(r#"{"score": 50, "coreIssue": "x", "diagnostics": [], "rewrites": []}"#))
            .create_async()
            .await;

        let client =
            GeminiClient::new(&server.url(), "test-model", Some("k".to_string())).unwrap();
        let err = client.analyze("some text").await.unwrap_err();

        assert!(matches!(err, HumanizeError::Schema(_)));
    }

    #[tokio::test]
    async fn test_analyze__provider_error_message() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", PATH)
            .with_status(403)
            .with_body(r#"{"error":{"code":403,"message":"API key not valid.","status":"PERMISSION_DENIED"}}"#)
            .expect(1)
            .create_async()
            .await;

        let client =
            GeminiClient::new(&server.url(), "test-model", Some("k".to_string())).unwrap();
        let err = client.analyze("some text").await.unwrap_err();

        match err {
            HumanizeError::Remote { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("Expected Remote variant, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_analyze__provider_error_without_body_is_not_retried() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let client =
            GeminiClient::new(&server.url(), "test-model", Some("k".to_string())).unwrap();
        let err = client.analyze("some text").await.unwrap_err();

        mock.assert_async().await;
        assert!(err.to_string().contains("503"));
    }
}
