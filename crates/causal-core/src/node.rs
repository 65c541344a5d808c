//! Node creation.
//!
//! Validates the intention, assigns the next node id, generates branches,
//! appends the node, and publishes it on `new_node`. A rejected intention
//! leaves the store untouched and publishes nothing.

use causal_types::{Node, ServerEvent, UserId};
use chrono::Utc;
use tracing::info;

use crate::branches;
use crate::error::CausalError;
use crate::field::CausalField;

/// Reality weight every node starts with.
pub const INITIAL_REALITY_WEIGHT: f64 = 0.5;

/// Check that an intention has visible content.
pub fn validate_intention(intention: &str) -> Result<(), CausalError> {
    if intention.trim().is_empty() {
        return Err(CausalError::Validation(String::from(
            "intention is required",
        )));
    }
    Ok(())
}

impl CausalField {
    /// Create a node for `intention` on behalf of `user_id`.
    ///
    /// `user_id` falls back to [`UserId::DEFAULT`]. The intention is stored
    /// as given, without trimming. Returns exactly the stored node, which
    /// is also what subscribers receive.
    ///
    /// # Errors
    ///
    /// Returns [`CausalError::Validation`] if `intention` is empty or only
    /// whitespace.
    pub async fn create_node(
        &self,
        intention: &str,
        user_id: Option<UserId>,
    ) -> Result<Node, CausalError> {
        validate_intention(intention)?;
        let user_id = user_id.unwrap_or_default();

        let mut store = self.store.write().await;
        let node = store.append_node(|id| Node {
            id,
            intention: intention.to_owned(),
            user_id,
            created_at: Utc::now(),
            reality_weight: INITIAL_REALITY_WEIGHT,
            branches: branches::generate(intention),
        });
        let receivers = self.broadcaster.publish(ServerEvent::NewNode(node.clone()));
        drop(store);

        info!(node_id = %node.id, user_id = %node.user_id, receivers, "Node created");
        Ok(node)
    }
}
