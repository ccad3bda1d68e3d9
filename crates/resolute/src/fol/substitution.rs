//! Variable substitutions

use super::clause::Clause;
use super::literal::Literal;
use super::term::{Term, Variable};
use crate::unification::UnificationError;
use std::collections::HashMap;
use std::fmt;

/// A substitution mapping variables to terms.
///
/// Bindings are stored triangular: a variable may be bound to a term that
/// mentions other bound variables, so applying the substitution chases
/// bindings until no bound variable remains. Unification only extends a
/// substitution after an occurs check, which keeps the chains acyclic and
/// application terminating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    map: HashMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Bind `var` to `term`, refusing bindings that would make application loop.
    ///
    /// `term` is taken as is; callers normally pass it already resolved.
    pub fn bind(&mut self, var: Variable, term: Term) -> Result<(), UnificationError> {
        // A rebound variable is checked against the other bindings only
        let previous = self.map.remove(&var);
        if self.occurs(&var, &term) {
            if let Some(previous) = previous {
                self.map.insert(var.clone(), previous);
            }
            return Err(UnificationError::OccursCheck(var, term));
        }
        self.map.insert(var, term);
        Ok(())
    }

    /// Get the term directly bound to a variable, if any
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Check whether `var` occurs in `term` once existing bindings are resolved
    pub fn occurs(&self, var: &Variable, term: &Term) -> bool {
        match term.apply_substitution(self) {
            Term::Variable { name } => name == var.name,
            Term::Constant { .. } => false,
            Term::Function { args, .. } => args.iter().any(|arg| self.occurs(var, arg)),
        }
    }

    /// Flatten the chains so every binding maps straight to its final term
    pub fn resolved(&self) -> Substitution {
        Substitution {
            map: self
                .map
                .iter()
                .map(|(var, term)| (var.clone(), term.apply_substitution(self)))
                .collect(),
        }
    }
}

impl Term {
    /// Apply a substitution to this term, chasing chained bindings
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable { name } => match subst.get(&Variable::new(name.as_str())) {
                Some(bound) => bound.apply_substitution(subst),
                None => self.clone(),
            },
            Term::Constant { .. } => self.clone(),
            Term::Function { name, args } => Term::Function {
                name: name.clone(),
                args: args.iter().map(|arg| arg.apply_substitution(subst)).collect(),
            },
        }
    }
}

impl Literal {
    /// Apply a substitution to this literal
    pub fn apply_substitution(&self, subst: &Substitution) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self
                .args
                .iter()
                .map(|arg| arg.apply_substitution(subst))
                .collect(),
            polarity: self.polarity,
        }
    }
}

impl Clause {
    /// Apply a substitution to this clause.
    ///
    /// Literals that become identical under the substitution coalesce.
    pub fn apply_substitution(&self, subst: &Substitution) -> Clause {
        self.literals()
            .map(|lit| lit.apply_substitution(subst))
            .collect()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bindings: Vec<_> = self.map.iter().collect();
        bindings.sort();
        write!(f, "{{")?;
        for (i, (var, term)) in bindings.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ↦ {}", var, term)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_substitution() {
        let mut subst = Substitution::new();
        subst.bind(Variable::new("X"), Term::constant("a")).unwrap();

        let result = Term::var("X").apply_substitution(&subst);
        assert_eq!(result, Term::constant("a"));
        assert_eq!(Term::var("Y").apply_substitution(&subst), Term::var("Y"));
    }

    #[test]
    fn test_chained_bindings_are_chased() {
        // X -> Y, Y -> f(Z), Z -> a
        let mut subst = Substitution::new();
        subst.bind(Variable::new("X"), Term::var("Y")).unwrap();
        subst.bind(Variable::new("Y"), Term::function("f", vec![Term::var("Z")])).unwrap();
        subst.bind(Variable::new("Z"), Term::constant("a")).unwrap();

        let result = Term::var("X").apply_substitution(&subst);
        assert_eq!(result, Term::function("f", vec![Term::constant("a")]));
    }

    #[test]
    fn test_substitution_lookup() {
        let mut subst = Substitution::new();
        subst.bind(Variable::new("X"), Term::constant("a")).unwrap();

        assert_eq!(subst.get(&Variable::new("X")), Some(&Term::constant("a")));
        assert_eq!(subst.get(&Variable::new("Y")), None);
    }

    #[test]
    fn test_bind_refuses_cyclic_bindings() {
        let x = Variable::new("X");
        let f_x = Term::function("f", vec![Term::var("X")]);

        let mut subst = Substitution::new();
        assert_eq!(
            subst.bind(x.clone(), f_x.clone()),
            Err(UnificationError::OccursCheck(x.clone(), f_x.clone()))
        );
        assert!(subst.is_empty());

        // Y -> X makes X occur in g(Y)
        subst.bind(Variable::new("Y"), Term::var("X")).unwrap();
        let g_y = Term::function("g", vec![Term::var("Y")]);
        assert!(subst.bind(x.clone(), g_y).is_err());
        assert_eq!(subst.len(), 1);

        // Rebinding X from a to f(X) must not slip past the check
        let mut subst = Substitution::new();
        subst.bind(x.clone(), Term::constant("a")).unwrap();
        assert!(subst.bind(x.clone(), f_x).is_err());
        assert_eq!(subst.get(&x), Some(&Term::constant("a")));
        assert_eq!(Term::var("X").apply_substitution(&subst), Term::constant("a"));
    }

    #[test]
    fn test_occurs_through_bindings() {
        // Y -> g(X): X occurs in f(Y)
        let mut subst = Substitution::new();
        subst.bind(Variable::new("Y"), Term::function("g", vec![Term::var("X")])).unwrap();

        let x = Variable::new("X");
        assert!(subst.occurs(&x, &Term::function("f", vec![Term::var("Y")])));
        assert!(subst.occurs(&x, &Term::var("X")));
        assert!(!subst.occurs(&x, &Term::function("f", vec![Term::var("Z")])));
        assert!(!subst.occurs(&x, &Term::constant("X")));
    }

    #[test]
    fn test_clause_substitution_coalesces_literals() {
        let clause = Clause::new(vec![
            Literal::positive("P", vec![Term::var("X")]),
            Literal::positive("P", vec![Term::var("Y")]),
        ]);
        let mut subst = Substitution::new();
        subst.bind(Variable::new("X"), Term::constant("a")).unwrap();
        subst.bind(Variable::new("Y"), Term::constant("a")).unwrap();

        let result = clause.apply_substitution(&subst);
        assert_eq!(result.len(), 1);
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn test_resolved_flattens_chains() {
        let mut subst = Substitution::new();
        subst.bind(Variable::new("X"), Term::var("Y")).unwrap();
        subst.bind(Variable::new("Y"), Term::constant("b")).unwrap();

        let flat = subst.resolved();
        assert_eq!(flat.get(&Variable::new("X")), Some(&Term::constant("b")));
        assert_eq!(flat.get(&Variable::new("Y")), Some(&Term::constant("b")));
    }
}
