//! Enumeration types for the Causal data model.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The outcome category of a branch.
///
/// Every node carries exactly one branch of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum BranchType {
    /// A favourable outcome.
    Positive,
    /// A mixed outcome that still carries growth.
    Neutral,
    /// An unfavourable outcome framed as a lesson.
    Negative,
    /// A low-probability twist.
    Unexpected,
}

impl BranchType {
    /// All branch types in generation order.
    pub const ALL: [Self; 4] = [
        Self::Positive,
        Self::Neutral,
        Self::Negative,
        Self::Unexpected,
    ];

    /// The wire name of this branch type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Unexpected => "unexpected",
        }
    }
}

impl core::fmt::Display for BranchType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
