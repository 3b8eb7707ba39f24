//! Qdrant-backed vector store

use std::sync::Arc;

use async_trait::async_trait;
use qdrant_client::Qdrant;
use qdrant_client::qdrant::SearchPointsBuilder;
use qdrant_client::qdrant::value::Kind;

use tripcover_core::{
    EmbeddingProvider, Error, Result, RetrievedPassage, SearchConfig, VectorStore,
};

use crate::config::RagConfig;

/// Vector store backed by a Qdrant collection.
///
/// Queries are embedded through the injected provider, then matched against
/// the collection by the index; ranking is Qdrant's.
pub struct QdrantVectorStore {
    client: Qdrant,
    embedder: Arc<dyn EmbeddingProvider>,
    config: RagConfig,
}

impl QdrantVectorStore {
    /// Build the client once; gRPC channels are established lazily on the
    /// first search.
    pub fn connect(config: RagConfig, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let client = Qdrant::from_url(&config.url)
            .api_key(config.api_key.clone())
            .build()
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        Ok(Self {
            client,
            embedder,
            config,
        })
    }

    pub fn collection(&self) -> &str {
        &self.config.collection
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    async fn similarity_search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<RetrievedPassage>> {
        let vector = self.embedder.embed(query).await?;

        let mut request =
            SearchPointsBuilder::new(self.config.collection.as_str(), vector, config.top_k)
                .with_payload(true);
        if let Some(threshold) = config.score_threshold {
            request = request.score_threshold(threshold);
        }

        let response = self
            .client
            .search_points(request)
            .await
            .map_err(|e| Error::VectorStore(e.to_string()))?;

        let passages = response
            .result
            .into_iter()
            .map(|point| {
                let content = point
                    .payload
                    .get(&self.config.text_key)
                    .and_then(|value| match &value.kind {
                        Some(Kind::StringValue(s)) => Some(s.clone()),
                        _ => None,
                    })
                    .unwrap_or_default();

                RetrievedPassage {
                    content,
                    score: Some(point.score),
                }
            })
            .collect();

        Ok(passages)
    }
}
