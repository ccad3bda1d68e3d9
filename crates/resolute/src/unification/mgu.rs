//! Most General Unifier (MGU) computation

use crate::fol::{Literal, Substitution, Term, Variable};

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Reasons two terms or literals fail to unify
///
/// These are expected outcomes: the resolver treats any of them as "this
/// literal pair does not resolve" and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Occurs check failed - variable occurs in term
    OccursCheck(Variable, Term),
    /// Constant symbols don't match
    ConstantClash(String, String),
    /// Function symbols don't match
    FunctionClash(String, String),
    /// Arities don't match
    ArityMismatch(usize, usize),
    /// Function-constant clash
    FunctionConstantClash(String, String),
    /// Literals over different predicates
    PredicateClash(String, String),
    /// Literals of the same polarity are never resolved upon
    SamePolarity,
}

/// Unify two terms, returning a most general unifier (MGU) if one exists
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    unify_terms(term1, term2, &Substitution::new())
}

/// Unify two terms under an existing substitution.
///
/// On success the returned substitution extends `subst`; `subst` itself is
/// left untouched either way.
pub fn unify_terms(term1: &Term, term2: &Term, subst: &Substitution) -> UnificationResult {
    let mut extended = subst.clone();
    unify_with_subst(term1, term2, &mut extended)?;
    Ok(extended)
}

/// Unify two complementary literals from the empty substitution.
///
/// Requires the same predicate, the same arity and opposite polarity, then
/// unifies the arguments left to right.
pub fn unify_literals(lit1: &Literal, lit2: &Literal) -> UnificationResult {
    if lit1.predicate != lit2.predicate {
        return Err(UnificationError::PredicateClash(
            lit1.predicate.clone(),
            lit2.predicate.clone(),
        ));
    }
    if lit1.polarity == lit2.polarity {
        return Err(UnificationError::SamePolarity);
    }
    let mut subst = Substitution::new();
    unify_args(&lit1.args, &lit2.args, &mut subst)?;
    Ok(subst)
}

fn unify_args(
    args1: &[Term],
    args2: &[Term],
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    if args1.len() != args2.len() {
        return Err(UnificationError::ArityMismatch(args1.len(), args2.len()));
    }
    for (arg1, arg2) in args1.iter().zip(args2.iter()) {
        unify_with_subst(arg1, arg2, subst)?;
    }
    Ok(())
}

fn unify_with_subst(
    term1: &Term,
    term2: &Term,
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    let t1 = term1.apply_substitution(subst);
    let t2 = term2.apply_substitution(subst);

    match (&t1, &t2) {
        // Same term - nothing to do
        _ if t1 == t2 => Ok(()),

        // Occurs check happens inside bind
        (Term::Variable { name }, t) | (t, Term::Variable { name }) => {
            subst.bind(Variable::new(name.as_str()), t.clone())
        }

        // Distinct constants (equal ones were caught above)
        (Term::Constant { name: c1 }, Term::Constant { name: c2 }) => {
            Err(UnificationError::ConstantClash(c1.clone(), c2.clone()))
        }

        (
            Term::Function { name: f1, args: args1 },
            Term::Function { name: f2, args: args2 },
        ) => {
            if f1 != f2 {
                return Err(UnificationError::FunctionClash(f1.clone(), f2.clone()));
            }
            unify_args(args1, args2, subst)
        }

        (Term::Function { name: f, .. }, Term::Constant { name: c })
        | (Term::Constant { name: c }, Term::Function { name: f, .. }) => {
            Err(UnificationError::FunctionConstantClash(f.clone(), c.clone()))
        }
    }
}
