//! Retrieval engine

use std::sync::Arc;

use tripcover_core::{Result, RetrievedPassage, SearchConfig, VectorStore};

/// Retrieval engine: turns a question into the context string the prompt
/// template is filled with.
///
/// The store is injected and shared; the engine itself holds no mutable
/// state, so one instance serves all requests.
pub struct RetrievalEngine {
    store: Arc<dyn VectorStore>,
    search: SearchConfig,
}

impl RetrievalEngine {
    pub fn new(store: Arc<dyn VectorStore>, search: SearchConfig) -> Self {
        Self { store, search }
    }

    /// Run the similarity search for a question and assemble the context.
    pub async fn context_for(&self, question: &str) -> Result<String> {
        let passages = self.store.similarity_search(question, &self.search).await?;
        Ok(build_context(&passages))
    }
}

/// Join passage contents with newlines, in the order the search returned
/// them. No reordering, no deduplication.
pub fn build_context(passages: &[RetrievedPassage]) -> String {
    passages
        .iter()
        .map(|passage| passage.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn passage(content: &str) -> RetrievedPassage {
        RetrievedPassage {
            content: content.to_string(),
            score: None,
        }
    }

    #[test]
    fn context_joins_in_search_order() {
        let passages = vec![
            passage("Cancellation is covered up to $2000."),
            passage("Baggage loss is covered up to $500."),
            passage("Cancellation is covered up to $2000."),
        ];

        // Duplicates stay; the ranking is the index's business.
        assert_eq!(
            build_context(&passages),
            "Cancellation is covered up to $2000.\n\
             Baggage loss is covered up to $500.\n\
             Cancellation is covered up to $2000."
        );
    }

    #[test]
    fn empty_result_yields_empty_context() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn single_passage_context_is_the_passage() {
        let passages = vec![passage("Policy X covers cancellation up to $2000.")];
        assert_eq!(
            build_context(&passages),
            "Policy X covers cancellation up to $2000."
        );
    }

    struct FixedStore(Vec<RetrievedPassage>);

    #[async_trait]
    impl VectorStore for FixedStore {
        async fn similarity_search(
            &self,
            _query: &str,
            _config: &SearchConfig,
        ) -> Result<Vec<RetrievedPassage>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn engine_returns_joined_context() {
        let store = FixedStore(vec![passage("first"), passage("second")]);
        let engine = RetrievalEngine::new(Arc::new(store), SearchConfig::default());

        let context = engine.context_for("anything").await.unwrap();
        assert_eq!(context, "first\nsecond");
    }
}
