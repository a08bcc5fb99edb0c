use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::TextGenerator;
use crate::config::GenerationConfig;
use crate::error::{RoadSageError, RsResult};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Blocking client for an Ollama-compatible chat endpoint.
///
/// Single-turn, non-streaming, no retries: one POST per prompt, the whole
/// response buffered before return.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> RsResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn from_config(cfg: &GenerationConfig) -> RsResult<Self> {
        Self::new(&cfg.endpoint, &cfg.model, cfg.timeout_secs)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn chat(&self, prompt: &str) -> RsResult<String> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let url = format!("{}/api/chat", self.base_url);
        debug!(%url, model = %self.model, "sending chat request");

        let resp = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&payload)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(RoadSageError::Endpoint(format!(
                "chat endpoint returned {}: {}",
                status, body
            )));
        }

        let data: ChatResponse = resp.json()?;
        let content = data.message.and_then(|m| m.content).ok_or_else(|| {
            RoadSageError::Endpoint("response is missing message.content".to_string())
        })?;

        debug!(chars = content.len(), "chat response received");
        Ok(content)
    }

    /// Probe `/api/tags` and return the installed model names.
    pub fn health_check(&self) -> RsResult<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let resp = self.client.get(&url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RoadSageError::Endpoint(format!(
                "tags endpoint returned {}",
                status
            )));
        }

        let data: Value = resp.json()?;
        let models = data["models"].as_array().ok_or_else(|| {
            RoadSageError::Endpoint("invalid response format from /api/tags".to_string())
        })?;

        if models.is_empty() {
            return Err(RoadSageError::Endpoint(
                "endpoint is up but no models are installed".to_string(),
            ));
        }

        Ok(models
            .iter()
            .filter_map(|m| m["name"].as_str().map(|s| s.to_string()))
            .collect())
    }
}

impl TextGenerator for OllamaClient {
    fn generate_text(&self, prompt: &str) -> String {
        match self.chat(prompt) {
            Ok(text) => text,
            Err(e) => {
                warn!("generation failed: {}", e);
                format!("⚠️ Error generating recommendation: {}", e)
            }
        }
    }
}
