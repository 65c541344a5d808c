//! Type-safe identifier wrappers.
//!
//! Users, nodes, and branches carry small sequential integer ids that the
//! web client displays and echoes back. Realtime connections get an opaque
//! UUID v7 so two sockets can never be confused with one another.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around a `u32` sequence number.
macro_rules! define_seq_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u32);

        impl $name {
            /// Return the inner sequence number.
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_seq_id! {
    /// Identifier of a registered user.
    UserId
}

define_seq_id! {
    /// Identifier of a decision node, assigned in creation order starting at 1.
    NodeId
}

define_seq_id! {
    /// Identifier of a branch within a node (always 1 through 4).
    BranchId
}

impl UserId {
    /// The seeded user that owns nodes submitted without a `userId`.
    pub const DEFAULT: Self = Self(1);
}

impl Default for UserId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Identifier assigned to a realtime connection when it subscribes.
///
/// Sent to the client in its `welcome` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SubscriberId(pub Uuid);

impl SubscriberId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
