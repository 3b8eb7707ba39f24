//! Chat completion endpoint

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{Json, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;

use tripcover_core::{ChatMessage, CompletionStream, Error};
use tripcover_rag::{PromptInputs, format_history, render_prompt};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Handle one chat request: split the conversation, retrieve context for
/// the latest question, render the prompt, and relay the completion
/// stream.
///
/// Each request is an independent linear pipeline; nothing is shared
/// mutably across requests.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let Some((current, history)) = request.messages.split_last() else {
        return Err(Error::InvalidRequest(
            "messages must contain at least one message".to_string(),
        )
        .into());
    };

    tracing::debug!(messages = request.messages.len(), "chat request");

    let chat_history = format_history(history);
    let context = state.retrieval.context_for(&current.content).await?;
    let prompt = render_prompt(&PromptInputs {
        context: &context,
        chat_history: &chat_history,
        question: &current.content,
    });

    let stream = state
        .completions
        .stream_completion(&prompt, &state.completion)
        .await?;

    Ok(relay(stream))
}

/// Relay completion chunks as a chunked plain-text body.
///
/// Each chunk is written as it arrives; nothing waits for the stream to
/// finish. Dropping the body on client disconnect drops the receiver,
/// which cancels the in-flight provider request.
fn relay(stream: CompletionStream) -> Response {
    let body = Body::from_stream(ReceiverStream::new(stream).map(|chunk| {
        chunk
            .map(|chunk| Bytes::from(chunk.content))
            .map_err(axum::BoxError::from)
    }));

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
