//! Core entity structs: users, decision nodes, branches, and resonance events.
//!
//! All structs serialize with camelCase field names, which is the shape the
//! web client reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::BranchType;
use crate::ids::{BranchId, NodeId, UserId};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user. Users are seeded at startup and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

// ---------------------------------------------------------------------------
// Branch
// ---------------------------------------------------------------------------

/// One possible outcome of a node's intention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Branch {
    /// Position of the branch within its node (1 through 4).
    pub id: BranchId,
    /// Human-readable outcome text.
    pub description: String,
    /// Weight of this outcome, strictly between 0 and 1.
    pub probability: f64,
    /// Outcome category.
    #[serde(rename = "type")]
    pub branch_type: BranchType,
    /// Display color as a `#RRGGBB` hex string.
    pub color: String,
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A submitted intention together with its generated outcome branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Node {
    /// Unique node identifier, assigned in creation order.
    pub id: NodeId,
    /// The intention text, never empty or all-whitespace.
    pub intention: String,
    /// The user who submitted the intention.
    pub user_id: UserId,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
    /// Collective belief strength in `[0, 1]`.
    pub reality_weight: f64,
    /// The four generated outcome branches, in fixed order.
    pub branches: Vec<Branch>,
}

// ---------------------------------------------------------------------------
// ResonanceEvent
// ---------------------------------------------------------------------------

/// A user's affinity signal toward a branch.
///
/// `user_id` is whatever opaque string the client supplied, and `branch_id`
/// is not checked against any stored node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ResonanceEvent {
    /// Client-supplied user handle.
    pub user_id: String,
    /// The branch the user resonated with.
    pub branch_id: BranchId,
    /// Strength of the resonance.
    pub strength: f64,
    /// When the event was recorded (UTC).
    pub timestamp: DateTime<Utc>,
}
