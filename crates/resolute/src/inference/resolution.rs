//! Binary resolution inference rule

use super::common::{standardize_apart, VariableRenamer};
use crate::fol::Clause;
use crate::simplifying::is_tautology;
use crate::unification::unify_literals;
use indexmap::IndexSet;
use log::trace;

/// Resolve two clauses on every complementary literal pair.
///
/// Both clauses are standardized apart first. Each pair of literals with the
/// same predicate, the same arity and opposite polarity whose arguments unify
/// yields the resolvent `(C1 - l1) ∪ (C2 - l2)` under the unifier. Tautologies
/// are dropped and identical resolvents collapse. An empty result means the
/// clauses do not resolve; it is not the empty clause.
pub fn resolve(clause1: &Clause, clause2: &Clause, renamer: &mut VariableRenamer) -> IndexSet<Clause> {
    let mut resolvents = IndexSet::new();

    let renamed1 = standardize_apart(clause1, renamer);
    let renamed2 = standardize_apart(clause2, renamer);
    debug_assert!(renamed1.variables().is_disjoint(&renamed2.variables()));

    for lit1 in renamed1.literals() {
        for lit2 in renamed2.literals() {
            if !lit1.is_complementary_candidate(lit2) {
                continue;
            }
            // A failed unification only means this pair does not resolve
            let Ok(mgu) = unify_literals(lit1, lit2) else {
                continue;
            };

            let rest1 = renamed1.without(lit1);
            let rest2 = renamed2.without(lit2);
            let resolvent: Clause = rest1
                .literals()
                .chain(rest2.literals())
                .map(|l| l.apply_substitution(&mgu))
                .collect();

            if is_tautology(&resolvent) {
                trace!("dropping tautological resolvent {}", resolvent);
                continue;
            }
            resolvents.insert(resolvent);
        }
    }

    resolvents
}
