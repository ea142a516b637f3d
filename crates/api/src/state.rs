use std::sync::Arc;

use profiler_llm::ChatClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: profiler_db::DbPool,
    /// Server configuration (read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Chat model used for prompt runs.
    pub chat: ChatService,
}

/// Chat client plus the sampling settings every run uses.
#[derive(Clone)]
pub struct ChatService {
    pub client: Arc<dyn ChatClient>,
    pub temperature: f32,
}
