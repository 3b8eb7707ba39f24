//! OpenAI integration for tripcover
//!
//! This crate provides the OpenAI implementations of the
//! `CompletionProvider` and `EmbeddingProvider` traits.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use tripcover_core::{
    CompletionChunk, CompletionConfig, CompletionProvider, CompletionStream,
    EmbeddingProvider, Error, Result,
};
