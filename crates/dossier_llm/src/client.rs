//! Model client: trait + Ollama implementation (self-hosted).

use std::time::Duration;

use serde::Deserialize;
use tokio::time::timeout;

use crate::error::{ModelError, Result};
use crate::types::CompletionRequest;

#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    /// One blocking completion call: instruction in, finished text out.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

/// Ollama HTTP client (localhost:11434). Self-hosted, no external API.
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:11434";
    pub const DEFAULT_MODEL: &'static str = "llama3.2:1b";

    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from `OLLAMA_BASE_URL` / `OLLAMA_MODEL`, with the
    /// defaults above for anything unset.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("OLLAMA_BASE_URL").ok(),
            std::env::var("OLLAMA_MODEL").ok(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl ModelClient for OllamaClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "prompt": request.prompt,
            "stream": false,
            "options": {
                "temperature": request.temperature,
                "num_predict": request.max_tokens,
            },
        });

        tracing::debug!(model = %self.model, prompt_len = request.prompt.len(), "model call");

        let duration = Duration::from_secs(request.timeout_secs);
        let response = timeout(duration, self.client.post(&url).json(&body).send())
            .await
            .map_err(|_| ModelError::Timeout(request.timeout_secs))??;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ModelError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = OllamaClient::new(None, None);
        assert_eq!(client.model(), "llama3.2:1b");
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[tokio::test]
    async fn test_complete_parses_response_field() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model":"llama3.2:1b","response":"Paris.","done":true}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(Some(server.url()), None);
        let text = client
            .complete(CompletionRequest::new("capital of France?"))
            .await
            .unwrap();
        assert_eq!(text, "Paris.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_response_field_defaults_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body(r#"{"done":true}"#)
            .create_async()
            .await;

        let client = OllamaClient::new(Some(server.url()), None);
        let text = client.complete(CompletionRequest::new("q")).await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_error_status_surfaces_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(500)
            .with_body("model not loaded")
            .create_async()
            .await;

        let client = OllamaClient::new(Some(server.url()), None);
        let err = client.complete(CompletionRequest::new("q")).await.unwrap_err();
        match err {
            ModelError::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("model not loaded"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = OllamaClient::new(Some(server.url()), None);
        let err = client.complete(CompletionRequest::new("q")).await.unwrap_err();
        assert!(matches!(err, ModelError::InvalidResponse(_)));
    }
}
