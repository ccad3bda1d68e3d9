//! Terms in first-order logic

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A variable in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A term in first-order logic
///
/// Equality and hashing are structural: two variables are equal iff they have
/// the same name, and function applications compare symbol and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Term {
    Variable { name: String },
    Constant { name: String },
    Function { name: String, args: Vec<Term> },
}

impl Term {
    /// Create a variable term
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable { name: name.into() }
    }

    /// Create a constant term
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant { name: name.into() }
    }

    /// Create a function application
    pub fn function(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Function {
            name: name.into(),
            args,
        }
    }

    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        match self {
            Term::Variable { name } => {
                vars.insert(Variable::new(name.clone()));
            }
            Term::Constant { .. } => {}
            Term::Function { args, .. } => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Visit every function symbol occurring in this term
    pub fn for_each_function(&self, f: &mut impl FnMut(&str, usize)) {
        if let Term::Function { name, args } = self {
            f(name, args.len());
            for arg in args {
                arg.for_each_function(f);
            }
        }
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Variable { name: v.name }
    }
}

// Display implementations for pretty printing

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable { name } | Term::Constant { name } => write!(f, "{}", name),
            Term::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
