//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Service banner |
//! | `GET` | `/api/users` | List seeded users |
//! | `GET` | `/api/nodes` | List all nodes in creation order |
//! | `POST` | `/api/nodes` | Create a node from an intention |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use causal_types::{Node, User, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/nodes`.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNodeRequest {
    /// The intention text. Missing or null is treated as empty.
    #[serde(default)]
    pub intention: Option<String>,
    /// Submitting user. Missing or null means the default user.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

// ---------------------------------------------------------------------------
// GET / -- service banner
// ---------------------------------------------------------------------------

/// Report that the service is up.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the Causal API!",
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/users
// ---------------------------------------------------------------------------

/// List all users.
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.field.users().await)
}

// ---------------------------------------------------------------------------
// GET /api/nodes
// ---------------------------------------------------------------------------

/// List every node in creation order.
///
/// Clients call this after connecting to the WebSocket, since the socket
/// carries no backlog.
pub async fn list_nodes(State(state): State<Arc<AppState>>) -> Json<Vec<Node>> {
    Json(state.field.nodes().await)
}

// ---------------------------------------------------------------------------
// POST /api/nodes
// ---------------------------------------------------------------------------

/// Create a node and broadcast it to every realtime subscriber.
///
/// Responds `201 Created` with the stored node, or `400 Bad Request` when
/// the intention is missing or blank.
pub async fn create_node(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateNodeRequest>,
) -> Result<(StatusCode, Json<Node>), ApiError> {
    let intention = request.intention.as_deref().unwrap_or_default();
    let node = state.field.create_node(intention, request.user_id).await?;
    Ok((StatusCode::CREATED, Json(node)))
}
