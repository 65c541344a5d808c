//! Shared type definitions for Causal.
//!
//! This crate is the single source of truth for the data shapes the server
//! stores and pushes to clients. Types flow downstream to `TypeScript` via
//! `ts-rs` for the web frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers
//! - [`enums`] -- Branch outcome categories
//! - [`structs`] -- Users, nodes, branches, and resonance events
//! - [`realtime`] -- WebSocket event envelopes

pub mod enums;
pub mod ids;
pub mod realtime;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::BranchType;
pub use ids::{BranchId, NodeId, SubscriberId, UserId};
pub use realtime::{ClientEvent, Resonate, ServerEvent, Welcome};
pub use structs::{Branch, Node, ResonanceEvent, User};
