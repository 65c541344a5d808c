//! The shared handle that ties the state store to the realtime bus.
//!
//! [`CausalField`] is what the transport layer holds. Mutations go through
//! the node and resonance services (see [`crate::node`] and
//! [`crate::resonance`]), which take the store's write lock, append, and
//! publish before releasing it. Publishing under the lock keeps broadcast
//! order identical to append order.

use std::sync::Arc;

use causal_types::{Node, ResonanceEvent, User};
use tokio::sync::RwLock;

use crate::broadcast::{Broadcaster, Subscription, DEFAULT_CAPACITY};
use crate::store::StateStore;

/// Handle to one isolated instance of the Causal state and its bus.
///
/// Cloning yields another handle to the same instance.
#[derive(Debug, Clone)]
pub struct CausalField {
    pub(crate) store: Arc<RwLock<StateStore>>,
    pub(crate) broadcaster: Broadcaster,
}

impl CausalField {
    /// Create a field over a seeded store with the default bus capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a field over a seeded store whose bus buffers `capacity`
    /// events per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(StateStore::seeded(), Broadcaster::new(capacity))
    }

    /// Create a field from an existing store and bus.
    pub fn from_parts(store: StateStore, broadcaster: Broadcaster) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            broadcaster,
        }
    }

    /// Subscribe to `new_node` and `resonance_update` broadcasts.
    pub fn subscribe(&self) -> Subscription {
        self.broadcaster.subscribe()
    }

    /// The realtime bus.
    pub const fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// All users.
    pub async fn users(&self) -> Vec<User> {
        self.store.read().await.users().to_vec()
    }

    /// All nodes in creation order.
    pub async fn nodes(&self) -> Vec<Node> {
        self.store.read().await.nodes().to_vec()
    }

    /// The full resonance log.
    pub async fn resonances(&self) -> Vec<ResonanceEvent> {
        self.store.read().await.resonances().to_vec()
    }

    /// Number of stored nodes.
    pub async fn node_count(&self) -> usize {
        self.store.read().await.node_count()
    }

    /// Number of recorded resonance events.
    pub async fn resonance_count(&self) -> usize {
        self.store.read().await.resonance_count()
    }
}

impl Default for CausalField {
    fn default() -> Self {
        Self::new()
    }
}
