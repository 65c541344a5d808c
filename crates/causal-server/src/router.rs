//! Axum router construction.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`] with
//! CORS and request tracing enabled.

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsOrigins;
use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- service banner
/// - `GET /ws` -- realtime `WebSocket`
/// - `GET /api/users` -- list users
/// - `GET /api/nodes` -- list nodes
/// - `POST /api/nodes` -- create a node
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.cors_origins);

    Router::new()
        .route("/", get(handlers::index))
        // WebSocket
        .route("/ws", get(ws::ws_realtime))
        // REST API
        .route("/api/users", get(handlers::list_users))
        .route(
            "/api/nodes",
            get(handlers::list_nodes).post(handlers::create_node),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(list) => layer
            .allow_origin(AllowOrigin::list(list.iter().cloned()))
            .allow_credentials(true),
    }
}
