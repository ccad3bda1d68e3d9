//! Common utilities for inference rules

use crate::fol::{Clause, Literal, Term, Variable};
use std::collections::HashMap;

/// Source of fresh variable names for one proof attempt.
///
/// Every fresh name ends in `_<n>` with `n` taken from a counter that only
/// increases, so two names minted by the same renamer never coincide.
#[derive(Debug, Clone, Default)]
pub struct VariableRenamer {
    counter: usize,
}

impl VariableRenamer {
    pub fn new() -> Self {
        VariableRenamer { counter: 0 }
    }

    /// Number of fresh variables handed out so far
    pub fn issued(&self) -> usize {
        self.counter
    }

    /// Mint a fresh variable derived from `base`
    pub fn fresh(&mut self, base: &Variable) -> Variable {
        self.counter += 1;
        Variable::new(format!("{}_{}", stem(&base.name), self.counter))
    }
}

/// Strip a previously minted `_<n>` suffix so names don't grow with every renaming
fn stem(name: &str) -> &str {
    match name.rsplit_once('_') {
        Some((head, tail))
            if !head.is_empty() && !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) =>
        {
            head
        }
        _ => name,
    }
}

/// Rename every variable of a clause to a fresh one.
///
/// Repeated occurrences of a variable map to the same fresh variable;
/// constants and function symbols are untouched.
pub fn standardize_apart(clause: &Clause, renamer: &mut VariableRenamer) -> Clause {
    let mut mapping = HashMap::new();
    clause
        .literals()
        .map(|lit| Literal {
            predicate: lit.predicate.clone(),
            args: lit
                .args
                .iter()
                .map(|arg| rename_variables(arg, &mut mapping, renamer))
                .collect(),
            polarity: lit.polarity,
        })
        .collect()
}

/// Rename variables in a term, reusing earlier choices from `mapping`
pub fn rename_variables(
    term: &Term,
    mapping: &mut HashMap<Variable, Variable>,
    renamer: &mut VariableRenamer,
) -> Term {
    match term {
        Term::Variable { name } => {
            let old = Variable::new(name.as_str());
            let fresh = mapping
                .entry(old)
                .or_insert_with_key(|old| renamer.fresh(old));
            Term::from(fresh.clone())
        }
        Term::Constant { .. } => term.clone(),
        Term::Function { name, args } => Term::Function {
            name: name.clone(),
            args: args
                .iter()
                .map(|arg| rename_variables(arg, mapping, renamer))
                .collect(),
        },
    }
}
