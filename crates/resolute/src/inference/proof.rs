//! Proof tracking structures

use super::derivation::Derivation;
use crate::fol::Clause;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single step in a proof derivation. Every step produces a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub clause_idx: usize,
    pub derivation: Derivation,
    pub conclusion: Clause,
}

/// A refutation: the clauses the empty clause depends on, in index order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub empty_clause_idx: usize,
}

impl Proof {
    /// Extract the refutation ending at `empty_clause_idx`.
    ///
    /// `clauses` and `derivations` are parallel; premises always point to
    /// lower indices, so sorting by index yields a valid derivation order.
    pub fn extract(clauses: &[Clause], derivations: &[Derivation], empty_clause_idx: usize) -> Self {
        let mut needed = Vec::new();
        let mut visited = HashSet::new();
        let mut to_visit = vec![empty_clause_idx];

        while let Some(idx) = to_visit.pop() {
            if !visited.insert(idx) {
                continue;
            }
            needed.push(idx);
            if let Some(derivation) = derivations.get(idx) {
                to_visit.extend(derivation.premises.iter().copied());
            }
        }
        needed.sort_unstable();

        let steps = needed
            .into_iter()
            .filter_map(|idx| {
                Some(ProofStep {
                    clause_idx: idx,
                    derivation: derivations.get(idx)?.clone(),
                    conclusion: clauses.get(idx)?.clone(),
                })
            })
            .collect();

        Proof {
            steps,
            empty_clause_idx,
        }
    }

    /// Number of resolution steps in the refutation
    pub fn inference_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.derivation.is_input()).count()
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{:>4}. {}", step.clause_idx, step.conclusion)?;
            if step.derivation.is_input() {
                writeln!(f, "  [{}]", step.derivation.rule_name)?;
            } else {
                let premises: Vec<String> =
                    step.derivation.premises.iter().map(|p| p.to_string()).collect();
                writeln!(f, "  [{} {}]", step.derivation.rule_name, premises.join(", "))?;
            }
        }
        Ok(())
    }
}
