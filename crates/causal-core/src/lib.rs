//! Core of the Causal intention field.
//!
//! Users submit an intention; the core turns it into a decision node with
//! four templated outcome branches, stores it, and pushes it to every
//! realtime subscriber. Resonance signals on branches are logged and pushed
//! the same way.
//!
//! # Modules
//!
//! - [`branches`] -- Deterministic branch generation
//! - [`store`] -- Append-only in-memory state
//! - [`broadcast`] -- Publish/subscribe fan-out to connected clients
//! - [`field`] -- [`CausalField`], the shared handle over store and bus
//! - [`node`] -- Node creation service
//! - [`resonance`] -- Resonance recording service
//! - [`error`] -- Core error type
//!
//! # Concurrency
//!
//! Every mutation holds the store's write lock across id assignment,
//! append, and publish. Node ids therefore stay unique and gap-free on a
//! multi-threaded runtime, and subscribers see events in append order.

pub mod branches;
pub mod broadcast;
pub mod error;
pub mod field;
pub mod node;
pub mod resonance;
pub mod store;

pub use broadcast::{Broadcaster, ConnectionState, Subscription};
pub use error::CausalError;
pub use field::CausalField;
pub use store::StateStore;
