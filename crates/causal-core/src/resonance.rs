//! Resonance recording.
//!
//! A resonance is logged and broadcast, nothing more. The referenced branch
//! is not looked up, and neither node reality weights nor branch
//! probabilities are touched.

use causal_types::{BranchId, ResonanceEvent, ServerEvent};
use chrono::Utc;
use tracing::debug;

use crate::field::CausalField;

/// Strength applied when the client sends none.
pub const DEFAULT_STRENGTH: f64 = 0.1;

impl CausalField {
    /// Record a resonance of `user_id` with `branch_id` and publish it on
    /// `resonance_update`.
    pub async fn record_resonance(
        &self,
        user_id: impl Into<String>,
        branch_id: BranchId,
        strength: Option<f64>,
    ) -> ResonanceEvent {
        let event = ResonanceEvent {
            user_id: user_id.into(),
            branch_id,
            strength: strength.unwrap_or(DEFAULT_STRENGTH),
            timestamp: Utc::now(),
        };

        let mut store = self.store.write().await;
        store.append_resonance(event.clone());
        let receivers = self
            .broadcaster
            .publish(ServerEvent::ResonanceUpdate(event.clone()));
        drop(store);

        debug!(
            user_id = %event.user_id,
            branch_id = %event.branch_id,
            strength = event.strength,
            receivers,
            "Resonance recorded"
        );
        event
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn explicit_strength_is_recorded_and_broadcast() {
        let field = CausalField::new();
        let mut sub = field.subscribe();

        let event = field.record_resonance("user_42", BranchId(2), Some(0.2)).await;

        assert_eq!(event.user_id, "user_42");
        assert_eq!(event.branch_id, BranchId(2));
        assert!((event.strength - 0.2).abs() < f64::EPSILON);
        assert_eq!(field.resonances().await, vec![event.clone()]);

        let Some(ServerEvent::ResonanceUpdate(broadcast)) = sub.recv().await else {
            panic!("expected resonance_update");
        };
        assert_eq!(broadcast, event);
    }

    #[tokio::test]
    async fn missing_strength_defaults() {
        let field = CausalField::new();
        let event = field.record_resonance("anon", BranchId(1), None).await;
        assert!((event.strength - DEFAULT_STRENGTH).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn log_grows_by_one_per_call() {
        let field = CausalField::new();
        for n in 1..=4 {
            field.record_resonance("u", BranchId(3), None).await;
            assert_eq!(field.resonance_count().await, n);
        }
    }

    #[tokio::test]
    async fn unknown_branch_is_accepted() {
        let field = CausalField::new();
        let event = field.record_resonance("u", BranchId(999), None).await;
        assert_eq!(event.branch_id, BranchId(999));
        assert_eq!(field.resonance_count().await, 1);
    }

    #[tokio::test]
    async fn resonance_leaves_nodes_unchanged() {
        let field = CausalField::new();
        let node = field.create_node("Plant a garden", None).await.unwrap();

        field.record_resonance("u", BranchId(1), Some(1.0)).await;

        assert_eq!(field.nodes().await, vec![node]);
    }
}
