//! Refutation by saturation
//!
//! [`prove_entailment`] negates the query, adds it to the knowledge base and
//! saturates until the empty clause appears, nothing new can be derived, or
//! the iteration budget runs out.

mod state;
pub mod trace;

pub use state::{InconclusiveReason, ProofOutcome, SaturationState, Verdict};
pub use trace::{RoundTrace, SaturationTrace};

use crate::config::ProverConfig;
use crate::error::{ResoluteError, Result};
use crate::fol::{Clause, Literal};
use log::info;
use std::collections::HashMap;

/// Decide whether `knowledge_base` entails `query`.
///
/// Inputs are validated before the loop starts: the budget must be positive,
/// predicate names non-empty, and every predicate and function symbol used
/// with a single arity.
pub fn prove_entailment(
    knowledge_base: &[Clause],
    query: &Literal,
    config: &ProverConfig,
) -> Result<ProofOutcome> {
    config.validate()?;
    check_signature(knowledge_base.iter().flat_map(Clause::literals).chain([query]))?;

    info!("Proving {} from {} clauses", query, knowledge_base.len());
    let negated_query = Clause::unit(query.complement());
    let state = SaturationState::new(knowledge_base.iter().cloned(), negated_query, config.clone());
    Ok(state.saturate())
}

/// Check that each symbol is used with one arity throughout
fn check_signature<'a>(literals: impl IntoIterator<Item = &'a Literal>) -> Result<()> {
    let mut predicates: HashMap<&str, usize> = HashMap::new();
    let mut functions: HashMap<String, usize> = HashMap::new();
    let mut mismatch = None;

    for lit in literals {
        if lit.predicate.is_empty() {
            return Err(ResoluteError::EmptyPredicate);
        }
        record_arity(&mut predicates, lit.predicate.as_str(), lit.arity())?;
        for arg in &lit.args {
            arg.for_each_function(&mut |name: &str, arity: usize| {
                if mismatch.is_none() {
                    if let Err(e) = record_arity(&mut functions, name.to_string(), arity) {
                        mismatch = Some(e);
                    }
                }
            });
        }
        if let Some(e) = mismatch.take() {
            return Err(e);
        }
    }
    Ok(())
}

fn record_arity<K>(seen: &mut HashMap<K, usize>, symbol: K, arity: usize) -> Result<()>
where
    K: std::hash::Hash + Eq + AsRef<str>,
{
    let symbol_name = symbol.as_ref().to_string();
    let expected = *seen.entry(symbol).or_insert(arity);
    if expected != arity {
        return Err(ResoluteError::ArityMismatch {
            symbol: symbol_name,
            expected,
            found: arity,
        });
    }
    Ok(())
}
