//! Core traits and types for tripcover
//!
//! This crate defines the fundamental traits and types used across the
//! tripcover service. It provides capability-facing interfaces for the
//! completion provider, the embedding provider, and the vector store,
//! making the system test-friendly and extensible.

pub mod chat;
pub mod completion;
pub mod embedding;
pub mod error;
pub mod vector_store;

pub use chat::{ChatMessage, Role};
pub use completion::{CompletionChunk, CompletionConfig, CompletionProvider, CompletionStream};
pub use embedding::EmbeddingProvider;
pub use error::{Error, Result};
pub use vector_store::{RetrievedPassage, SearchConfig, VectorStore};
