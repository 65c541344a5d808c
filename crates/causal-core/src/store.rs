//! In-memory state store.
//!
//! [`StateStore`] owns users, nodes and the resonance log for the lifetime
//! of the process. It is append-only: nothing is updated or deleted, and
//! nothing survives a restart.
//!
//! The store itself is not synchronized. [`CausalField`] wraps it in a
//! [`tokio::sync::RwLock`] so that id assignment and the append happen in a
//! single critical section.
//!
//! [`CausalField`]: crate::field::CausalField

use causal_types::{Node, NodeId, ResonanceEvent, User, UserId};

/// Append-only registry of users, nodes, and resonance events.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    users: Vec<User>,
    nodes: Vec<Node>,
    resonances: Vec<ResonanceEvent>,
    /// Id handed to the most recently appended node (0 when empty).
    last_node_id: u32,
}

impl StateStore {
    /// Create an empty store with no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the default user.
    pub fn seeded() -> Self {
        Self {
            users: vec![User {
                id: UserId::DEFAULT,
                name: String::from("Quantum Pioneer"),
                email: String::from("test@causal.com"),
            }],
            ..Self::default()
        }
    }

    /// All registered users.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The resonance log in arrival order.
    pub fn resonances(&self) -> &[ResonanceEvent] {
        &self.resonances
    }

    /// Number of stored nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of recorded resonance events.
    pub fn resonance_count(&self) -> usize {
        self.resonances.len()
    }

    /// Assign the next node id, build the node with it, and append it.
    ///
    /// The id is `node_count + 1` and overrides whatever id `build` put on
    /// the node. Returns a copy of exactly what was stored.
    pub fn append_node(&mut self, build: impl FnOnce(NodeId) -> Node) -> Node {
        // u32 ids cannot run out before memory does.
        let id = NodeId(self.last_node_id.saturating_add(1));
        let mut node = build(id);
        node.id = id;
        self.last_node_id = id.into_inner();
        self.nodes.push(node.clone());
        node
    }

    /// Append a resonance event to the log.
    pub fn append_resonance(&mut self, event: ResonanceEvent) {
        self.resonances.push(event);
    }
}
