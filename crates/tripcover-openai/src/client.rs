//! OpenAI API client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

use tripcover_core::{
    CompletionChunk, CompletionConfig, CompletionProvider, CompletionStream,
    EmbeddingProvider, Error, Result,
};

use crate::config::OpenAiConfig;

const EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI API client
///
/// One instance serves both the embeddings and the chat-completions
/// endpoints; construct it once and share it.
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct StreamEvent {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiClient {
    /// Create a new client from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenAiConfig::from_env()?;
        Self::new(config)
    }

    /// Turn a non-success API response into a provider error with the
    /// upstream status attached
    async fn provider_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or(body);
        Error::Provider { status, message }
    }
}

/// Extract a chunk from one SSE `data:` payload.
///
/// Returns `None` for payloads that are not a well-formed completion event;
/// the caller decides whether to skip or warn.
fn parse_stream_event(data: &str) -> Option<CompletionChunk> {
    let event = serde_json::from_str::<StreamEvent>(data).ok()?;
    let choice = event.choices.into_iter().next()?;
    Some(CompletionChunk {
        content: choice.delta.content.unwrap_or_default(),
        finish_reason: choice.finish_reason,
    })
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request_body = EmbeddingRequest {
            model: &self.config.embedding_model,
            input: text,
        };

        let url = format!("{}/embeddings", self.config.api_url);

        let send = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send();

        let response = match timeout(EMBEDDING_TIMEOUT, send).await {
            Ok(result) => result.map_err(|e| Error::Network(e.to_string()))?,
            Err(_) => return Err(Error::Timeout("embedding request timed out".to_string())),
        };

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let body: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                Error::EmbeddingProvider("embedding response contained no data".to_string())
            })
    }

    fn model_id(&self) -> &str {
        &self.config.embedding_model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn stream_completion(
        &self,
        prompt: &str,
        config: &CompletionConfig,
    ) -> Result<CompletionStream> {
        let request_body = ChatCompletionRequest {
            model: &self.config.chat_model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
            temperature: config.temperature,
            stream: true,
            max_tokens: config.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.api_url);

        let send = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send();

        // The deadline covers time-to-first-byte; generation itself is
        // unbounded and ends when the provider closes the stream.
        let response = match timeout(config.timeout, send).await {
            Ok(result) => result.map_err(|e| Error::Network(e.to_string()))?,
            Err(_) => return Err(Error::Timeout("completion request timed out".to_string())),
        };

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let (tx, rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let mut stream = response.bytes_stream();
            // SSE buffer to handle TCP chunk boundaries
            let mut sse_buffer = String::new();

            while let Some(item) = stream.next().await {
                let bytes = match item {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        let _ = tx.send(Err(Error::Network(e.to_string()))).await;
                        return;
                    }
                };

                sse_buffer.push_str(&String::from_utf8_lossy(&bytes));

                // Process complete lines from the buffer
                while let Some(newline_pos) = sse_buffer.find('\n') {
                    let line = sse_buffer[..newline_pos].trim_end_matches('\r').to_string();
                    sse_buffer.drain(..=newline_pos);

                    let Some(data) = line.strip_prefix("data: ") else {
                        continue;
                    };

                    if data.trim().is_empty() {
                        continue;
                    }

                    if data.trim() == "[DONE]" {
                        return;
                    }

                    match parse_stream_event(data) {
                        Some(chunk) => {
                            let done = chunk.is_final();
                            // A closed receiver means the caller went away;
                            // dropping the response cancels the request.
                            if tx.send(Ok(chunk)).await.is_err() {
                                return;
                            }
                            if done {
                                return;
                            }
                        }
                        None => {
                            tracing::warn!(payload = data, "skipping unparseable stream event");
                        }
                    }
                }
            }
        });

        Ok(rx)
    }

    fn model_id(&self) -> &str {
        &self.config.chat_model
    }
}
