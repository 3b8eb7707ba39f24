use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Import from our modular crates
use tripcover_core::CompletionConfig;
use tripcover_openai::OpenAiClient;
use tripcover_rag::{QdrantVectorStore, RagConfig, RetrievalEngine};
use tripcover_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server_config = ServerConfig::from_env()?;
    let rag_config = RagConfig::from_env()?;
    let search = rag_config.search();

    // One OpenAI client serves embeddings and completions; the Qdrant
    // client lives for the process as well.
    let openai = Arc::new(OpenAiClient::from_env()?);
    let store = QdrantVectorStore::connect(rag_config, openai.clone())?;
    let retrieval = RetrievalEngine::new(Arc::new(store), search);

    let state = Arc::new(AppState::new(
        retrieval,
        openai,
        CompletionConfig::default(),
    ));

    let listener = TcpListener::bind(server_config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", server_config.bind_addr))?;
    info!("listening on http://{}", server_config.bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("shutting down");
}
