//! Retrieval configuration

use serde::{Deserialize, Serialize};
use std::env;
use tripcover_core::{Error, Result, SearchConfig};

/// Configuration for the Qdrant-backed retrieval side.
///
/// The collection and its embeddings are owned by an external ingestion
/// process; this only names where to look and which payload field carries
/// the raw passage text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub collection: String,
    /// Payload field holding the raw text of a passage
    pub text_key: String,
    pub top_k: u64,
    pub score_threshold: Option<f32>,
}

impl RagConfig {
    pub const DEFAULT_URL: &'static str = "http://localhost:6334";
    pub const DEFAULT_COLLECTION: &'static str = "travel-insurance";
    pub const DEFAULT_TEXT_KEY: &'static str = "text";
    pub const DEFAULT_TOP_K: u64 = 4;

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("QDRANT_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string());
        let api_key = env::var("QDRANT_API_KEY").ok();
        let collection =
            env::var("QDRANT_COLLECTION").unwrap_or_else(|_| Self::DEFAULT_COLLECTION.to_string());
        let text_key =
            env::var("QDRANT_TEXT_KEY").unwrap_or_else(|_| Self::DEFAULT_TEXT_KEY.to_string());

        let top_k = match env::var("RAG_TOP_K") {
            Ok(raw) => raw.parse().map_err(|_| {
                Error::Configuration(format!("RAG_TOP_K must be a positive integer, got {raw:?}"))
            })?,
            Err(_) => Self::DEFAULT_TOP_K,
        };

        let score_threshold = match env::var("RAG_SCORE_THRESHOLD") {
            Ok(raw) => Some(raw.parse().map_err(|_| {
                Error::Configuration(format!("RAG_SCORE_THRESHOLD must be a float, got {raw:?}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            url,
            api_key,
            collection,
            text_key,
            top_k,
            score_threshold,
        })
    }

    /// Search parameters derived from this configuration
    pub fn search(&self) -> SearchConfig {
        SearchConfig {
            top_k: self.top_k,
            score_threshold: self.score_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = RagConfig {
            url: RagConfig::DEFAULT_URL.to_string(),
            api_key: None,
            collection: RagConfig::DEFAULT_COLLECTION.to_string(),
            text_key: RagConfig::DEFAULT_TEXT_KEY.to_string(),
            top_k: RagConfig::DEFAULT_TOP_K,
            score_threshold: None,
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        url: "http://localhost:6334"
        api_key: ~
        collection: travel-insurance
        text_key: text
        top_k: 4
        score_threshold: ~
        "###);
    }

    #[test]
    fn search_config_carries_top_k_and_threshold() {
        let config = RagConfig {
            url: RagConfig::DEFAULT_URL.to_string(),
            api_key: None,
            collection: RagConfig::DEFAULT_COLLECTION.to_string(),
            text_key: RagConfig::DEFAULT_TEXT_KEY.to_string(),
            top_k: 7,
            score_threshold: Some(0.5),
        };

        let search = config.search();
        assert_eq!(search.top_k, 7);
        assert_eq!(search.score_threshold, Some(0.5));
    }
}
