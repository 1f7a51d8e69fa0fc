use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). There is no
/// database here: the request path reads the portfolio JSON document on
/// every request, keyed by `config.data_path`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (bind address, CORS, data document path).
    pub config: Arc<ServerConfig>,
}
