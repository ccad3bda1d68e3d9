//! Literals in first-order logic

use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A literal (predicate applied to terms, positive or negated)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub predicate: String,
    pub args: Vec<Term>,
    pub polarity: bool, // true = positive, false = negative
}

impl Literal {
    /// Create a new positive literal
    pub fn positive(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal {
            predicate: predicate.into(),
            args,
            polarity: true,
        }
    }

    /// Create a new negative literal
    pub fn negative(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Literal {
            predicate: predicate.into(),
            args,
            polarity: false,
        }
    }

    /// Get the complement of this literal
    pub fn complement(&self) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self.args.clone(),
            polarity: !self.polarity,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Same predicate, same arity and opposite polarity.
    ///
    /// Whether the arguments unify is left to the caller.
    pub fn is_complementary_candidate(&self, other: &Literal) -> bool {
        self.polarity != other.polarity
            && self.predicate == other.predicate
            && self.args.len() == other.args.len()
    }

    /// Check if `other` is the exact negation of this literal
    pub fn is_negation_of(&self, other: &Literal) -> bool {
        self.is_complementary_candidate(other) && self.args == other.args
    }

    /// Collect all variables in this literal
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        for term in &self.args {
            term.collect_variables(vars);
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}(", self.predicate)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
