use std::sync::Arc;

use maison_notify::Transport;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The transport is injected here so the composer never touches
/// process-wide singletons; lifecycle is owned by `main`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: maison_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound delivery transport (email + WhatsApp).
    pub transport: Arc<dyn Transport>,
}
