//! Realtime event envelopes exchanged over the WebSocket.
//!
//! Every frame is a JSON text message of the form
//! `{"event": "<name>", "data": <payload>}`:
//!
//! | Event | Direction | Payload |
//! |-------|-----------|---------|
//! | `welcome` | server to new subscriber | [`Welcome`] |
//! | `new_node` | server to all subscribers | [`Node`] |
//! | `resonance_update` | server to all subscribers | [`ResonanceEvent`] |
//! | `resonate` | subscriber to server | [`Resonate`] |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{BranchId, SubscriberId};
use crate::structs::{Node, ResonanceEvent};

/// Greeting sent once to a subscriber right after it connects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Welcome {
    /// Greeting text.
    pub message: String,
    /// The id assigned to this connection.
    pub user_id: SubscriberId,
}

/// A resonance signal sent by a subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Resonate {
    /// Client-supplied user handle.
    pub user_id: String,
    /// The branch being resonated with.
    pub branch_id: BranchId,
    /// Optional strength; the server applies its default when absent.
    #[serde(default)]
    #[ts(optional)]
    pub strength: Option<f64>,
}

/// Events pushed from the server to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ServerEvent {
    /// Sent only to a newly connected subscriber.
    Welcome(Welcome),
    /// A node was created.
    NewNode(Node),
    /// A resonance event was recorded.
    ResonanceUpdate(ResonanceEvent),
}

impl ServerEvent {
    /// The broadcast channel name carried in the `event` field.
    pub const fn channel(&self) -> &'static str {
        match self {
            Self::Welcome(_) => "welcome",
            Self::NewNode(_) => "new_node",
            Self::ResonanceUpdate(_) => "resonance_update",
        }
    }
}

/// Events sent from a subscriber to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ClientEvent {
    /// Resonate with a branch.
    Resonate(Resonate),
}
