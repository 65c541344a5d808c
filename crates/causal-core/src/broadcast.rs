//! Realtime fan-out of node and resonance events.
//!
//! [`Broadcaster`] is a thin publish/subscribe bus over
//! [`tokio::sync::broadcast`]. Every publish reaches every live
//! [`Subscription`], including the one whose client triggered it. There is
//! no acknowledgement and no replay: a subscriber only sees events published
//! after it subscribed, and a subscriber that falls more than the channel
//! capacity behind skips ahead to the oldest retained event.

use causal_types::{ServerEvent, SubscriberId, Welcome};
use tokio::sync::broadcast;
use tracing::debug;

/// Default per-subscriber buffer of the fan-out channel.
pub const DEFAULT_CAPACITY: usize = 256;

/// Greeting carried in every `welcome` message.
pub const WELCOME_MESSAGE: &str = "Welcome to the Causal quantum field!";

/// Publish side of the realtime bus. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    tx: broadcast::Sender<ServerEvent>,
}

impl Broadcaster {
    /// Create a bus buffering up to `capacity` events per subscriber.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Subscription {
        let id = SubscriberId::new();
        debug!(subscriber = %id, "Subscriber connected");
        Subscription {
            id,
            rx: self.tx.subscribe(),
            state: ConnectionState::Connected,
        }
    }

    /// Publish an event to every current subscriber.
    ///
    /// Returns the number of subscribers the event was queued for. Zero
    /// subscribers is not an error.
    pub fn publish(&self, event: ServerEvent) -> usize {
        let channel = event.channel();
        // send fails only when nobody is subscribed.
        let receivers = self.tx.send(event).unwrap_or(0);
        debug!(channel, receivers, "Published realtime event");
        receivers
    }

    /// Number of currently connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Lifecycle of a realtime connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Receiving broadcasts.
    Connected,
    /// Terminal. No further delivery.
    Disconnected,
}

/// Receive side of the realtime bus for a single connection.
///
/// Dropping the subscription disconnects it.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    rx: broadcast::Receiver<ServerEvent>,
    state: ConnectionState,
}

impl Subscription {
    /// The id assigned to this connection.
    pub const fn id(&self) -> SubscriberId {
        self.id
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    /// The one-time `welcome` event for this connection.
    pub fn welcome(&self) -> ServerEvent {
        ServerEvent::Welcome(Welcome {
            message: String::from(WELCOME_MESSAGE),
            user_id: self.id,
        })
    }

    /// Wait for the next broadcast event.
    ///
    /// Events are yielded in publish order. Returns `None` once the
    /// subscription is disconnected or every [`Broadcaster`] is gone.
    /// Cancel safe.
    pub async fn recv(&mut self) -> Option<ServerEvent> {
        if self.state == ConnectionState::Disconnected {
            return None;
        }
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(subscriber = %self.id, skipped, "Subscriber lagged, skipping ahead");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    self.disconnect();
                    return None;
                }
            }
        }
    }

    /// Mark the connection as disconnected. Idempotent.
    pub fn disconnect(&mut self) {
        if self.state == ConnectionState::Connected {
            debug!(subscriber = %self.id, "Subscriber disconnected");
            self.state = ConnectionState::Disconnected;
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use causal_types::{BranchId, ResonanceEvent};
    use chrono::Utc;

    use super::*;

    fn resonance(strength: f64) -> ServerEvent {
        ServerEvent::ResonanceUpdate(ResonanceEvent {
            user_id: String::from("u"),
            branch_id: BranchId(1),
            strength,
            timestamp: Utc::now(),
        })
    }

    #[tokio::test]
    async fn publish_reaches_every_subscriber() {
        let bus = Broadcaster::default();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        assert_eq!(bus.publish(resonance(0.1)), 2);

        assert!(matches!(a.recv().await, Some(ServerEvent::ResonanceUpdate(_))));
        assert!(matches!(b.recv().await, Some(ServerEvent::ResonanceUpdate(_))));
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_not_an_error() {
        let bus = Broadcaster::default();
        assert_eq!(bus.publish(resonance(0.1)), 0);
    }

    #[tokio::test]
    async fn per_subscriber_order_is_preserved() {
        let bus = Broadcaster::default();
        let mut sub = bus.subscribe();

        for i in 1..=5 {
            bus.publish(resonance(f64::from(i)));
        }

        for i in 1..=5 {
            let Some(ServerEvent::ResonanceUpdate(event)) = sub.recv().await else {
                panic!("expected resonance update");
            };
            assert!((event.strength - f64::from(i)).abs() < f64::EPSILON);
        }
    }

    #[tokio::test]
    async fn late_subscriber_gets_no_backlog() {
        let bus = Broadcaster::default();
        let _early = bus.subscribe();
        bus.publish(resonance(0.1));

        let mut late = bus.subscribe();
        bus.publish(resonance(0.9));

        let Some(ServerEvent::ResonanceUpdate(event)) = late.recv().await else {
            panic!("expected resonance update");
        };
        assert!((event.strength - 0.9).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn lagged_subscriber_skips_ahead() {
        let bus = Broadcaster::new(2);
        let mut sub = bus.subscribe();

        for i in 1..=5 {
            bus.publish(resonance(f64::from(i)));
        }

        let Some(ServerEvent::ResonanceUpdate(event)) = sub.recv().await else {
            panic!("expected resonance update");
        };
        assert!((event.strength - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn welcome_carries_subscriber_id() {
        let bus = Broadcaster::default();
        let sub = bus.subscribe();
        let ServerEvent::Welcome(welcome) = sub.welcome() else {
            panic!("expected welcome");
        };
        assert_eq!(welcome.user_id, sub.id());
        assert_eq!(welcome.message, WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn disconnected_subscription_receives_nothing() {
        let bus = Broadcaster::default();
        let mut sub = bus.subscribe();
        sub.disconnect();
        bus.publish(resonance(0.1));

        assert_eq!(sub.state(), ConnectionState::Disconnected);
        assert!(sub.recv().await.is_none());
    }

    #[tokio::test]
    async fn closed_bus_disconnects_subscription() {
        let bus = Broadcaster::default();
        let mut sub = bus.subscribe();
        drop(bus);

        assert!(sub.recv().await.is_none());
        assert_eq!(sub.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn dropping_subscription_lowers_count() {
        let bus = Broadcaster::default();
        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
