//! Shared application state for the Causal server.

use causal_core::CausalField;

use crate::config::{CorsOrigins, ServerConfig};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Every handler and WebSocket connection works against the same
/// [`CausalField`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Node store and realtime bus.
    pub field: CausalField,
    /// Browser origins allowed by CORS.
    pub cors_origins: CorsOrigins,
}

impl AppState {
    /// Create a state with a fresh seeded field that accepts any origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state sized and scoped by `config`.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            field: CausalField::with_capacity(config.broadcast_capacity),
            cors_origins: config.cors_origins.clone(),
        }
    }
}
