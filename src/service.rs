//! Client for a local Ollama-compatible model service.
//!
//! Single-shot, sequential requests: list the models the service reports,
//! then run a test prompt against each. Failures degrade to diagnostics,
//! never abort the run.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Characters of a generation response kept for display.
pub const RESPONSE_PREVIEW_CHARS: usize = 300;

/// Timeout for the tags listing. The generation call has its own configured
/// timeout; everything else gets this bound so a dead endpoint cannot hang
/// the run.
const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// One model as reported by the tags endpoint. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteModel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<RemoteModel>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Outcome of a successful test generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub model: String,
    /// Response text, truncated for display.
    pub text: String,
}

/// First `RESPONSE_PREVIEW_CHARS` characters of a response.
pub fn truncate_response(text: &str) -> String {
    text.chars().take(RESPONSE_PREVIEW_CHARS).collect()
}

pub struct OllamaClient {
    http: Client,
    base_url: String,
    generate_timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            generate_timeout: Duration::from_secs(config.generate_timeout_secs),
        }
    }

    /// Models the service reports, in listing order. Non-fatal: any failure
    /// prints a diagnostic and yields an empty list.
    pub async fn list_models(&self) -> Vec<RemoteModel> {
        match self.fetch_tags().await {
            Ok(models) => models,
            Err(err) => {
                warn!(error = %err, "model listing failed");
                println!("Could not connect to the model service or list models: {}", err);
                Vec::new()
            }
        }
    }

    async fn fetch_tags(&self) -> Result<Vec<RemoteModel>, ServiceError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .http
            .get(&url)
            .timeout(LIST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ServiceError::from_reqwest(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::HttpStatus { url, status });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::from_reqwest(&url, e))?;

        debug!(count = tags.models.len(), "listed models");
        Ok(tags.models)
    }

    /// Run one test prompt against `model`. The response text is truncated
    /// for display; errors are returned for the caller to render and skip.
    pub async fn test_model(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<GenerationResult, ServiceError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(&url)
            .timeout(self.generate_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::from_reqwest(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::HttpStatus { url, status });
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::from_reqwest(&url, e))?;

        Ok(GenerationResult {
            model: model.to_string(),
            text: truncate_response(&generated.response),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_body() {
        let body = r#"{"models":[{"name":"llama2","size":3826793677},{"name":"mistral"}]}"#;
        let tags: TagsResponse = serde_json::from_str(body).unwrap();
        let names: Vec<&str> = tags.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["llama2", "mistral"]);
    }

    #[test]
    fn test_parse_tags_body_without_models_field() {
        let tags: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(tags.models.is_empty());
    }

    #[test]
    fn test_truncate_response() {
        let long = "x".repeat(500);
        assert_eq!(truncate_response(&long).chars().count(), 300);

        let short = "short answer";
        assert_eq!(truncate_response(short), short);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let multibyte = "é".repeat(400);
        let truncated = truncate_response(&multibyte);
        assert_eq!(truncated.chars().count(), 300);
        assert!(truncated.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_generate_request_wire_format() {
        let req = GenerateRequest {
            model: "llama2",
            prompt: "hi",
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"model": "llama2", "prompt": "hi", "stream": false})
        );
    }
}
