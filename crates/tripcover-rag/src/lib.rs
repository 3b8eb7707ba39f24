//! Retrieval-augmented generation support for tripcover
//!
//! This crate provides the Qdrant-backed vector store, the retrieval
//! engine that turns a question into a context string, and the prompt
//! template the chat endpoint sends to the completion model.

mod config;
mod engine;
mod prompt;
mod vector_store;

pub use config::RagConfig;
pub use engine::{RetrievalEngine, build_context};
pub use prompt::{PromptInputs, format_history, render_prompt};
pub use vector_store::QdrantVectorStore;

// Re-export core types for convenience
pub use tripcover_core::{
    Error, Result, RetrievedPassage, SearchConfig, VectorStore,
};
