//! `WebSocket` handler for the realtime channel.
//!
//! Clients connect to `GET /ws`. On connect a client receives one
//! `welcome` message with its subscriber id, then every `new_node` and
//! `resonance_update` published after it subscribed, its own included.
//! Clients send `resonate` events; each is recorded and broadcast to all
//! subscribers.
//!
//! Frames are JSON text messages `{"event": "<name>", "data": <payload>}`.
//! Undecodable client frames are logged and dropped.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use causal_core::CausalField;
use causal_types::{ClientEvent, ResonanceEvent, ServerEvent};
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Upgrade an HTTP request to a `WebSocket` connection.
///
/// # Route
///
/// `GET /ws`
pub async fn ws_realtime(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Handle the `WebSocket` lifecycle: subscribe, greet, then forward
/// broadcasts out and resonance events in until either side closes.
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    // Subscribe before greeting so nothing published in between is missed.
    let mut subscription = state.field.subscribe();
    let subscriber = subscription.id();
    info!(%subscriber, "Realtime client connected");

    if send_event(&mut socket, &subscription.welcome()).await.is_err() {
        debug!(%subscriber, "WebSocket client disconnected (welcome failed)");
        subscription.disconnect();
        return;
    }

    loop {
        tokio::select! {
            // Forward a broadcast to this client.
            event = subscription.recv() => {
                let Some(event) = event else {
                    debug!(%subscriber, "Broadcast channel closed, shutting down WebSocket");
                    break;
                };
                if send_event(&mut socket, &event).await.is_err() {
                    debug!(%subscriber, "WebSocket client disconnected (send failed)");
                    break;
                }
            }
            // Handle a frame from the client.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        dispatch_client_text(&state.field, text.as_str()).await;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            debug!(%subscriber, "WebSocket client disconnected (pong failed)");
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        debug!(%subscriber, "WebSocket error: {e}");
                        break;
                    }
                    _ => {
                        // Binary and pong frames carry nothing for us.
                    }
                }
            }
        }
    }

    subscription.disconnect();
    info!(%subscriber, "Realtime client disconnected");
}

/// Serialize and send one server event.
///
/// An event that fails to serialize is logged and skipped; only a failed
/// send is reported to the caller.
async fn send_event(socket: &mut WebSocket, event: &ServerEvent) -> Result<(), axum::Error> {
    let json = match serde_json::to_string(event) {
        Ok(j) => j,
        Err(e) => {
            warn!(channel = event.channel(), "Failed to serialize realtime event: {e}");
            return Ok(());
        }
    };
    socket.send(Message::Text(json.into())).await
}

/// Decode a client text frame and act on it.
///
/// Returns the recorded event for a valid `resonate` frame, or `None` if the
/// frame could not be decoded.
pub async fn dispatch_client_text(field: &CausalField, text: &str) -> Option<ResonanceEvent> {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(ClientEvent::Resonate(resonate)) => {
            debug!(
                user_id = %resonate.user_id,
                branch_id = %resonate.branch_id,
                "Resonance received"
            );
            Some(
                field
                    .record_resonance(resonate.user_id, resonate.branch_id, resonate.strength)
                    .await,
            )
        }
        Err(e) => {
            warn!("Ignoring undecodable client frame: {e}");
            None
        }
    }
}
