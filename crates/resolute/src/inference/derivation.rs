//! Clause derivation tracking.
//!
//! Records how each clause entered the clause set (inference rule + premises).

use serde::{Deserialize, Serialize};

/// How a clause was derived.
///
/// ```
/// use resolute::Derivation;
///
/// let resolvent = Derivation::resolution(3, 7);
/// assert_eq!(resolvent.rule_name, "Resolution");
/// assert_eq!(resolvent.premises, vec![3, 7]);
/// assert!(Derivation::negated_query().is_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    /// Name of the inference rule that produced this clause
    pub rule_name: String,
    /// Indices of the premise clauses used in the inference
    pub premises: Vec<usize>,
}

impl Derivation {
    /// A knowledge-base clause (no premises)
    pub fn input() -> Self {
        Derivation {
            rule_name: "Input".into(),
            premises: vec![],
        }
    }

    /// The unit clause holding the negated query
    pub fn negated_query() -> Self {
        Derivation {
            rule_name: "NegatedQuery".into(),
            premises: vec![],
        }
    }

    /// A binary resolvent of the clauses at `left` and `right`
    pub fn resolution(left: usize, right: usize) -> Self {
        Derivation {
            rule_name: "Resolution".into(),
            premises: vec![left, right],
        }
    }

    pub fn is_input(&self) -> bool {
        self.premises.is_empty()
    }
}
