//! Embedding provider trait

use async_trait::async_trait;

use crate::Result;

/// Trait for embedding providers
///
/// Converts text into the vector representation the similarity search
/// compares against.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single piece of text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Identifier of the embedding model in use
    fn model_id(&self) -> &str;
}
