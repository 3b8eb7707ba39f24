//! Shared application state

use std::sync::Arc;

use tripcover_core::{CompletionConfig, CompletionProvider};
use tripcover_rag::RetrievalEngine;

/// State shared by all requests.
///
/// Built once at startup; the store and provider clients live for the
/// process so no request pays a connection setup.
pub struct AppState {
    pub retrieval: RetrievalEngine,
    pub completions: Arc<dyn CompletionProvider>,
    pub completion: CompletionConfig,
}

impl AppState {
    pub fn new(
        retrieval: RetrievalEngine,
        completions: Arc<dyn CompletionProvider>,
        completion: CompletionConfig,
    ) -> Self {
        Self {
            retrieval,
            completions,
            completion,
        }
    }
}
