//! Completion provider trait and streaming types

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::Result;

/// Sampling and transport parameters for a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Deadline for the provider to start responding
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// One increment of generated text
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionChunk {
    pub content: String,
    pub finish_reason: Option<String>,
}

impl CompletionChunk {
    pub fn is_final(&self) -> bool {
        self.finish_reason.is_some()
    }
}

/// Receiver side of an in-flight completion.
///
/// Chunks arrive in generation order; the stream is single-pass and not
/// restartable. Dropping the receiver cancels the in-flight request.
pub type CompletionStream = mpsc::Receiver<Result<CompletionChunk>>;

/// Trait for streaming completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Start a streaming completion for a fully-formed prompt.
    ///
    /// Returns an error before any chunk is produced when the provider
    /// rejects the request; after that, failures travel in-stream.
    async fn stream_completion(
        &self,
        prompt: &str,
        config: &CompletionConfig,
    ) -> Result<CompletionStream>;

    /// Identifier of the completion model in use
    fn model_id(&self) -> &str;
}
