//! HTTP surface for tripcover
//!
//! Exposes `POST /api/chat` (the retrieval-augmented streaming chat
//! endpoint) and `GET /health`. All collaborators are injected through
//! [`AppState`], so the router can be exercised in tests with in-process
//! fakes.

mod chat;
mod config;
mod error;
mod routes;
mod state;

pub use chat::ChatRequest;
pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
