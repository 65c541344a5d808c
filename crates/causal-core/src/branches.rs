//! Outcome branch generation.
//!
//! Every intention gets the same four templated branches. Only the first
//! description mentions the intention; probabilities, types and colors are
//! constants, so two nodes differ in their branches only by that text.

use causal_types::{Branch, BranchId, BranchType};

/// Number of branches attached to every node.
pub const BRANCH_COUNT: usize = 4;

/// A fixed branch template.
struct Template {
    id: u32,
    probability: f64,
    branch_type: BranchType,
    color: &'static str,
}

/// Templates in generation order. Probabilities sum to 1.0.
const TEMPLATES: [Template; BRANCH_COUNT] = [
    Template {
        id: 1,
        probability: 0.3,
        branch_type: BranchType::Positive,
        color: "#4CAF50",
    },
    Template {
        id: 2,
        probability: 0.4,
        branch_type: BranchType::Neutral,
        color: "#FFC107",
    },
    Template {
        id: 3,
        probability: 0.2,
        branch_type: BranchType::Negative,
        color: "#F44336",
    },
    Template {
        id: 4,
        probability: 0.1,
        branch_type: BranchType::Unexpected,
        color: "#9C27B0",
    },
];

/// Generate the four outcome branches for an intention.
///
/// Total over every input, including the empty string. Rejecting empty
/// intentions is the node service's job.
pub fn generate(intention: &str) -> Vec<Branch> {
    TEMPLATES
        .iter()
        .map(|t| Branch {
            id: BranchId(t.id),
            description: describe(t.branch_type, intention),
            probability: t.probability,
            branch_type: t.branch_type,
            color: t.color.to_owned(),
        })
        .collect()
}

fn describe(branch_type: BranchType, intention: &str) -> String {
    match branch_type {
        BranchType::Positive => format!("Unexpected success regarding: \"{intention}\""),
        BranchType::Neutral => String::from("A challenge that leads to personal growth"),
        BranchType::Negative => String::from("An important lesson to learn"),
        BranchType::Unexpected => String::from("An unforeseen turn that changes everything"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn generates_four_branches_in_order() {
        let branches = generate("Change jobs");
        assert_eq!(branches.len(), BRANCH_COUNT);

        let ids: Vec<u32> = branches.iter().map(|b| b.id.into_inner()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let sum: f64 = generate("anything").iter().map(|b| b.probability).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn each_type_appears_once() {
        let types: BTreeSet<BranchType> = generate("x").iter().map(|b| b.branch_type).collect();
        assert_eq!(types.len(), BRANCH_COUNT);
        assert_eq!(types, BranchType::ALL.into_iter().collect());
    }

    #[test]
    fn only_first_description_mentions_intention() {
        let branches = generate("Move to Lisbon");
        assert_eq!(
            branches[0].description,
            "Unexpected success regarding: \"Move to Lisbon\""
        );
        assert!(branches[1..]
            .iter()
            .all(|b| !b.description.contains("Lisbon")));
    }

    #[test]
    fn deterministic_for_same_intention() {
        assert_eq!(generate("Start a band"), generate("Start a band"));
    }

    #[test]
    fn weights_independent_of_intention() {
        let a = generate("a");
        let b = generate("something much longer and different");
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.branch_type, y.branch_type);
            assert_eq!(x.color, y.color);
            assert!((x.probability - y.probability).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn empty_intention_is_accepted() {
        let branches = generate("");
        assert_eq!(branches.len(), BRANCH_COUNT);
        assert_eq!(branches[0].description, "Unexpected success regarding: \"\"");
    }

    #[test]
    fn probabilities_strictly_inside_unit_interval() {
        assert!(generate("x")
            .iter()
            .all(|b| b.probability > 0.0 && b.probability < 1.0));
    }
}
