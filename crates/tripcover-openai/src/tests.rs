//! Snapshot tests for the OpenAI client

#[cfg(test)]
mod snapshot_tests {
    use crate::OpenAiConfig;
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_config_snapshot() {
        let config = OpenAiConfig {
            api_key: "test_api_key_redacted".to_string(),
            api_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-3.5-turbo".to_string(),
            embedding_model: "text-embedding-ada-002".to_string(),
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_api_key_redacted
        api_url: "https://api.openai.com/v1"
        chat_model: gpt-3.5-turbo
        embedding_model: text-embedding-ada-002
        "###);
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new("k".to_string());
        assert_eq!(config.api_url, OpenAiConfig::DEFAULT_API_URL);
        assert_eq!(config.chat_model, "gpt-3.5-turbo");
        assert_eq!(config.embedding_model, "text-embedding-ada-002");
    }
}
