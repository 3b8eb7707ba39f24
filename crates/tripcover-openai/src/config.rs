//! OpenAI configuration

use serde::{Deserialize, Serialize};
use std::env;
use tripcover_core::{Error, Result};

/// Configuration for the OpenAI client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_url: String,
    pub chat_model: String,
    pub embedding_model: String,
}

impl OpenAiConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_CHAT_MODEL: &'static str = "gpt-3.5-turbo";
    pub const DEFAULT_EMBEDDING_MODEL: &'static str = "text-embedding-ada-002";

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Configuration("OPENAI_API_KEY environment variable not found".to_string())
        })?;

        let api_url =
            env::var("OPENAI_API_URL").unwrap_or_else(|_| Self::DEFAULT_API_URL.to_string());

        let chat_model =
            env::var("OPENAI_CHAT_MODEL").unwrap_or_else(|_| Self::DEFAULT_CHAT_MODEL.to_string());

        let embedding_model = env::var("OPENAI_EMBEDDING_MODEL")
            .unwrap_or_else(|_| Self::DEFAULT_EMBEDDING_MODEL.to_string());

        Ok(Self {
            api_key,
            api_url,
            chat_model,
            embedding_model,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: Self::DEFAULT_API_URL.to_string(),
            chat_model: Self::DEFAULT_CHAT_MODEL.to_string(),
            embedding_model: Self::DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}
