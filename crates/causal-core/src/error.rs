//! Error types for the Causal core.
//!
//! Rejected requests leave the state store untouched and publish nothing.

/// Errors raised by the node and resonance services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CausalError {
    /// The request failed input validation and can be corrected by the caller.
    #[error("validation error: {0}")]
    Validation(String),
}
