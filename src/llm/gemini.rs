//! Gemini API client.
//!
//! Thin typed client for the `generateContent` endpoint.
//! Based on https://ai.google.dev/api/generate-content

use crate::error::{Result, TekstError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// One role-tagged piece of conversation content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Gemini generative-language API.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one ordered content sequence and return the model's reply text.
    ///
    /// Any transport or API failure is reported as a `Provider` error; the
    /// caller is expected to surface it, not crash on it.
    pub async fn generate(&self, contents: &[Content]) -> Result<String> {
        let request = GenerateContentRequest { contents };

        debug!("Calling Gemini model {}", self.model);

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", BASE_URL, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TekstError::Provider(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TekstError::Provider(format!(
                "{}: {}",
                status,
                error_message(&body)
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TekstError::Provider(format!("Malformed response: {}", e)))?;

        extract_text(&response)
            .ok_or_else(|| TekstError::Provider("Empty response from model".to_string()))
    }

    /// Single-prompt convenience wrapper around `generate`.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.generate(&[Content::user(prompt)]).await
    }
}

/// Join the text parts of the first candidate.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text = content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<String>()
        .trim()
        .to_string();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Pull the human-readable message out of an API error body, if present.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let contents = vec![Content::user("hello"), Content::model("hi there")];
        let request = GenerateContentRequest {
            contents: &contents,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hello" }] },
                    { "role": "model", "parts": [{ "text": "hi there" }] }
                ]
            })
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "part one " }, { "text": "part two" }]
                }
            }]
        }))
        .unwrap();

        assert_eq!(extract_text(&response).unwrap(), "part one part two");
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_text(&response).is_none());

        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "  " }] } }]
        }))
        .unwrap();
        assert!(extract_text(&response).is_none());
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid"}}"#;
        assert_eq!(error_message(body), "API key not valid");

        assert_eq!(error_message("plain text failure"), "plain text failure");
    }
}
