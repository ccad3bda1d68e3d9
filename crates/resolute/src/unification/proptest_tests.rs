//! Property-based tests for unification and substitution using proptest.

use super::{unify, unify_literals, unify_terms};
use crate::fol::{Literal, Substitution, Term};
use proptest::prelude::*;

/// Term description over a small fixed symbol set.
///
/// Names are drawn from few choices so that generated pairs share variables
/// and symbols often enough to exercise both success and clash paths.
#[derive(Debug, Clone)]
enum TermDesc {
    Var(u8),                 // Variable index 0-3
    Const(u8),               // Constant index 0-3
    Func(u8, Vec<TermDesc>), // Function index 0-1, with args
}

fn arb_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        prop_oneof![
            (0..4u8).prop_map(TermDesc::Var),
            (0..4u8).prop_map(TermDesc::Const),
        ]
        .boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(TermDesc::Var),
            3 => (0..4u8).prop_map(TermDesc::Const),
            2 => (0..2u8, proptest::collection::vec(arb_term_desc(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| TermDesc::Func(f, args)),
        ]
        .boxed()
    }
}

fn build_term(desc: &TermDesc) -> Term {
    match desc {
        TermDesc::Var(i) => Term::var(format!("X{}", i)),
        TermDesc::Const(i) => Term::constant(format!("c{}", i)),
        TermDesc::Func(f, args) => {
            // Arity is part of the symbol name so that f/1 and f/2 never meet
            Term::function(format!("f{}_{}", f, args.len()), args.iter().map(build_term).collect())
        }
    }
}

fn arb_term(max_depth: u32) -> impl Strategy<Value = Term> {
    arb_term_desc(max_depth).prop_map(|desc| build_term(&desc))
}

/// Generate a pair of terms over the same symbols
fn arb_term_pair(max_depth: u32) -> impl Strategy<Value = (Term, Term)> {
    (arb_term(max_depth), arb_term(max_depth))
}

// =========================================================================
// Unification properties
// =========================================================================

proptest! {
    /// Soundness: if unify(s, t) = σ, then sσ = tσ
    #[test]
    fn unification_soundness((t1, t2) in arb_term_pair(3)) {
        if let Ok(sigma) = unify(&t1, &t2) {
            let t1_sigma = t1.apply_substitution(&sigma);
            let t2_sigma = t2.apply_substitution(&sigma);
            prop_assert_eq!(t1_sigma, t2_sigma, "unifier must make terms equal");
        }
    }

    /// Symmetry: unify(s, t) succeeds iff unify(t, s) succeeds
    #[test]
    fn unification_symmetry((t1, t2) in arb_term_pair(3)) {
        let r1 = unify(&t1, &t2);
        let r2 = unify(&t2, &t1);
        prop_assert_eq!(r1.is_ok(), r2.is_ok(), "unification should be symmetric");
    }

    /// Occurs check: unify(X, f(...X...)) should always fail
    #[test]
    fn unification_occurs_check(func_idx in 0..2u8, depth in 1..4u32) {
        let x = Term::var("X");
        let mut term = x.clone();
        for _ in 0..depth {
            term = Term::function(format!("f{}", func_idx), vec![term, Term::constant("c0")]);
        }

        prop_assert!(unify(&x, &term).is_err(), "occurs check should prevent X = f(...X...)");
        prop_assert!(unify(&term, &x).is_err(), "occurs check should be symmetric");
    }

    /// Identity: unify(t, t) succeeds without binding anything
    #[test]
    fn unification_identity(t in arb_term(3)) {
        let result = unify(&t, &t);
        prop_assert!(result.is_ok(), "term should unify with itself");
        if let Ok(sigma) = result {
            prop_assert!(sigma.is_empty());
        }
    }

    /// Threading: a unifier found under σ still agrees with σ's bindings
    #[test]
    fn unification_extends_existing((t1, t2) in arb_term_pair(2), (s1, s2) in arb_term_pair(2)) {
        if let Ok(sigma) = unify(&s1, &s2) {
            if let Ok(tau) = unify_terms(&t1, &t2, &sigma) {
                prop_assert_eq!(s1.apply_substitution(&tau), s2.apply_substitution(&tau));
                prop_assert_eq!(t1.apply_substitution(&tau), t2.apply_substitution(&tau));
            }
        }
    }

    /// Literal soundness: a literal unifier makes the argument lists equal
    #[test]
    fn literal_unification_soundness(args1 in proptest::collection::vec(arb_term(2), 0..3),
                                     args2 in proptest::collection::vec(arb_term(2), 0..3)) {
        let l1 = Literal::positive("P", args1);
        let l2 = Literal::negative("P", args2);
        if let Ok(sigma) = unify_literals(&l1, &l2) {
            let l1_sigma = l1.apply_substitution(&sigma);
            let l2_sigma = l2.apply_substitution(&sigma);
            prop_assert!(l1_sigma.is_negation_of(&l2_sigma));
        }
    }
}

// =========================================================================
// Substitution properties
// =========================================================================

proptest! {
    /// Empty substitution is identity
    #[test]
    fn substitution_identity(t in arb_term(3)) {
        let empty = Substitution::new();
        let t_applied = t.apply_substitution(&empty);
        prop_assert_eq!(t, t_applied, "empty substitution should be identity");
    }

    /// Applying a unifier twice is the same as applying it once
    #[test]
    fn substitution_idempotence((t1, t2) in arb_term_pair(3), t in arb_term(3)) {
        if let Ok(sigma) = unify(&t1, &t2) {
            let once = t.apply_substitution(&sigma);
            let twice = once.apply_substitution(&sigma);
            prop_assert_eq!(&once, &twice);

            let flat = sigma.resolved();
            prop_assert_eq!(t.apply_substitution(&flat), once);
        }
    }
}
