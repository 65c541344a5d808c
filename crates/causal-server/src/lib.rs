//! HTTP and `WebSocket` server for Causal.
//!
//! This crate exposes the [`causal_core`] node and resonance services over
//! Axum:
//!
//! - **REST endpoints** to list users and nodes and to create a node from
//!   an intention
//! - **`WebSocket` endpoint** (`/ws`) that greets each client and then
//!   streams `new_node` and `resonance_update` events, accepting
//!   `resonate` events in return
//!
//! # Architecture
//!
//! Every handler and connection shares one [`CausalField`] through
//! [`AppState`]. Node creation over REST and resonance over the socket both
//! land on the same broadcast bus, so each connected client sees every
//! change in the order it was stored.
//!
//! [`CausalField`]: causal_core::CausalField

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use config::{ConfigError, CorsOrigins, ServerConfig};
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;
