//! Clauses

use super::literal::Literal;
use super::term::Variable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A clause (disjunction of literals)
///
/// Literals are kept in a set: no duplicates, and two clauses holding the same
/// literals compare equal regardless of construction order. The empty clause
/// denotes a contradiction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The empty clause
    pub fn empty() -> Self {
        Clause::default()
    }

    /// Create a unit clause
    pub fn unit(literal: Literal) -> Self {
        Clause::new([literal])
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Build a new clause without `literal`
    pub fn without(&self, literal: &Literal) -> Clause {
        Clause {
            literals: self
                .literals
                .iter()
                .filter(|l| *l != literal)
                .cloned()
                .collect(),
        }
    }

    /// Collect all variables in this clause
    pub fn variables(&self) -> HashSet<Variable> {
        let mut vars = HashSet::new();
        for lit in &self.literals {
            lit.collect_variables(&mut vars);
        }
        vars
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = std::collections::btree_set::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::Term;

    #[test]
    fn test_set_semantics() {
        let p = Literal::positive("P", vec![Term::var("x")]);
        let q = Literal::negative("Q", vec![Term::constant("a")]);

        let c1 = Clause::new(vec![p.clone(), q.clone()]);
        let c2 = Clause::new(vec![q.clone(), p.clone(), p.clone()]);
        assert_eq!(c1, c2);
        assert_eq!(c2.len(), 2);
    }

    #[test]
    fn test_without_leaves_original_untouched() {
        let p = Literal::positive("P", vec![Term::var("x")]);
        let q = Literal::negative("Q", vec![Term::constant("a")]);
        let clause = Clause::new(vec![p.clone(), q.clone()]);

        let rest = clause.without(&p);
        assert_eq!(rest, Clause::unit(q));
        assert_eq!(clause.len(), 2);
        assert!(clause.contains(&p));
    }

    #[test]
    fn test_display() {
        assert_eq!(Clause::empty().to_string(), "⊥");
        let clause = Clause::new(vec![
            Literal::negative("Food", vec![Term::var("x")]),
            Literal::positive("Likes", vec![Term::constant("John"), Term::var("x")]),
        ]);
        assert_eq!(clause.to_string(), "~Food(x) ∨ Likes(John,x)");
    }
}
