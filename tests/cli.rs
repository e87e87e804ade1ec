mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::{Matcher, Server};
    use predicates::prelude::PredicateBooleanExt;
    use predicates::str::contains;
    use serde_json::json;

    use std::io::Write;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "humanize";
    const DEFAULT_PATH: &str = "/v1beta/models/gemini-3-pro-preview:generateContent";
    const KEY_VARS: [&str; 3] = ["HUMANIZE_API_KEY", "GEMINI_API_KEY", "API_KEY"];

    fn analysis_payload() -> String {
        json!({
            "score": 82,
            "coreIssue": "Excessive nominalization",
            "diagnostics": [{
                "original": "the implementation of the optimization was performed",
                "violation": "Lexical: Nominalization",
                "diagnosis": "Buries the action in noun form"
            }],
            "rewrites": [{
                "original": "the implementation of the optimization was performed",
                "rewritten": "we optimized it",
                "strategy": "Verb-Driven"
            }],
            "fullRewrittenText": "Honestly, we optimized it and it worked."
        })
        .to_string()
    }

    fn gemini_body(text: &str) -> String {
        json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
            .to_string()
    }

    /// Command with no ambient credentials or config files
    fn humanize(endpoint: &str) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        for var in KEY_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1")
            .args(["--no-config", "--no-progress", "--endpoint", endpoint]);
        Ok(cmd)
    }

    #[tokio::test]
    async fn test_output__when_analysis_succeeds() -> TestResult {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", DEFAULT_PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::Regex("It was done\\.".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(gemini_body(&analysis_payload()))
            .expect(1)
            .create_async()
            .await;

        humanize(&server.url())?
            .args(["--api-key", "test-key", "It was done."])
            .assert()
            .success()
            .stdout(contains("Index 82/100"))
            .stdout(contains("High AI Probability"))
            .stdout(contains("Excessive nominalization"))
            .stdout(contains("Honestly, we optimized it and it worked."))
            .stdout(contains("[Verb-Driven]"));

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_json_format_requested() -> TestResult {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", DEFAULT_PATH)
            .with_status(200)
            .with_body(gemini_body(&analysis_payload()))
            .create_async()
            .await;

        humanize(&server.url())?
            .env("GEMINI_API_KEY", "env-key")
            .args(["--format", "json", "It was done."])
            .assert()
            .success()
            .stdout(contains("\"coreIssue\": \"Excessive nominalization\""))
            .stdout(contains("\"fullRewrittenText\""));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_api_key_missing() -> TestResult {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        humanize(&server.url())?
            .arg("Some text")
            .assert()
            .failure()
            .code(1)
            .stderr(contains(
                "API Key is missing. Please check your environment configuration.",
            ))
            .stderr(contains("Configuration error").not());

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_provider_rejects_request() -> TestResult {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", DEFAULT_PATH)
            .with_status(403)
            .with_body(r#"{"error":{"code":403,"message":"API key not valid.","status":"PERMISSION_DENIED"}}"#)
            .create_async()
            .await;

        humanize(&server.url())?
            .args(["--api-key", "bad-key", "Some text"])
            .assert()
            .failure()
            .stderr(contains("API key not valid."));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_response_is_malformed() -> TestResult {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", DEFAULT_PATH)
            .with_status(200)
            .with_body(gemini_body(r#"{"score": 50, "coreIssue": "Flat"}"#))
            .create_async()
            .await;

        humanize(&server.url())?
            .args(["--api-key", "k", "Some text"])
            .assert()
            .failure()
            .stderr(contains("Malformed analysis response"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_response_has_no_text() -> TestResult {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", DEFAULT_PATH)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        humanize(&server.url())?
            .args(["--api-key", "k", "Some text"])
            .assert()
            .failure()
            .stderr(contains("No response generated from AI."));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_input_is_blank() -> TestResult {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        humanize(&server.url())?
            .args(["--api-key", "k", "   \n\t"])
            .assert()
            .failure()
            .stderr(contains("Nothing to analyze"));

        mock.assert_async().await;
        Ok(())
    }

    #[test]
    fn test_output__when_no_text_provided() -> TestResult {
        humanize("http://127.0.0.1:9")?
            .assert()
            .failure()
            .stderr(contains("No text provided"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_text_read_from_stdin_and_file() -> TestResult {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", DEFAULT_PATH)
            .match_body(Matcher::Regex("piped words".to_string()))
            .with_status(200)
            .with_body(gemini_body(&analysis_payload()))
            .expect(2)
            .create_async()
            .await;

        assert_cmd::Command::from_std(humanize(&server.url())?)
            .args(["--api-key", "k", "-"])
            .write_stdin("some piped words")
            .assert()
            .success();

        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"file of piped words")?;
        humanize(&server.url())?
            .args(["--api-key", "k", "--file"])
            .arg(file.path())
            .assert()
            .success();

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_report_requested() -> TestResult {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", DEFAULT_PATH)
            .with_status(200)
            .with_body(gemini_body(&analysis_payload()))
            .create_async()
            .await;
        let dir = tempfile::tempdir()?;
        let mut stylesheet = tempfile::NamedTempFile::new()?;
        stylesheet.write_all(b".print-only { display: none; }")?;

        humanize(&server.url())?
            .args(["--api-key", "k", "--stylesheet"])
            .arg(stylesheet.path())
            .args(["--stylesheet", "https://cdn.example.com/theme.css", "--report"])
            .arg(dir.path())
            .arg("It was done.")
            .assert()
            .success()
            .stderr(contains("Report saved to"))
            .stderr(contains("1 stylesheet could not be embedded"));

        let reports: Vec<_> = std::fs::read_dir(dir.path())?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        assert_eq!(reports.len(), 1);

        let name = reports[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Humanize_AI_Report_"));
        assert!(name.ends_with(".html"));

        let html = std::fs::read_to_string(&reports[0])?;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@import url('https://fonts.googleapis.com/css2?family=Inter"));
        assert!(html.contains(".print-only { display: none; }"));
        assert!(html.contains("Excessive nominalization"));
        assert!(html.contains("Powered by gemini-3-pro-preview"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_config_file_selects_model() -> TestResult {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-custom:generateContent")
            .with_status(200)
            .with_body(gemini_body(&analysis_payload()))
            .expect(1)
            .create_async()
            .await;

        let mut config = tempfile::NamedTempFile::new()?;
        writeln!(config, "model = \"gemini-custom\"")?;
        writeln!(config, "endpoint = \"{}\"", server.url())?;
        writeln!(config, "output_format = \"json\"")?;

        let mut cmd = Command::cargo_bin(NAME)?;
        for var in KEY_VARS {
            cmd.env_remove(var);
        }
        cmd.args(["--api-key", "k", "--config"])
            .arg(config.path())
            .arg("It was done.")
            .assert()
            .success()
            .stdout(contains("\"score\": 82"));

        mock.assert_async().await;
        Ok(())
    }

    #[test]
    fn test_output__when_config_file_is_invalid() -> TestResult {
        let mut config = tempfile::NamedTempFile::new()?;
        writeln!(config, "api_key = \"secret\"")?;

        Command::cargo_bin(NAME)?
            .arg("--config")
            .arg(config.path())
            .arg("text")
            .assert()
            .failure()
            .stderr(contains("Invalid TOML in config file"));
        Ok(())
    }

    #[test]
    fn test_output__when_format_is_unknown() -> TestResult {
        Command::cargo_bin(NAME)?
            .args(["--format", "xml", "text"])
            .assert()
            .failure()
            .stderr(contains("invalid value 'xml'"));
        Ok(())
    }

    #[test]
    fn test_output__completion_generate() -> TestResult {
        Command::cargo_bin(NAME)?
            .args(["completion-generate", "bash"])
            .assert()
            .success()
            .stdout(contains("humanize"));
        Ok(())
    }
}
