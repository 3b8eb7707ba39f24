//! Vector store trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A passage returned by a similarity search.
///
/// Produced per-request; not persisted. The score is whatever the index
/// reported and is not used for re-ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedPassage {
    pub content: String,
    pub score: Option<f32>,
}

/// Configuration for vector search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub top_k: u64,
    pub score_threshold: Option<f32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: 4,
            score_threshold: None,
        }
    }
}

/// Trait for vector stores (e.g., Qdrant, Pinecone, etc.)
///
/// The collection itself is owned by an external ingestion process; this
/// interface is the read side only.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Return the passages whose embeddings are closest to the query text,
    /// ranked by the index.
    async fn similarity_search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<RetrievedPassage>>;
}
