//! Resolute: a resolution refutation prover for first-order clauses
//!
//! Clauses are built programmatically from terms and literals. To decide
//! whether a knowledge base entails a query literal, the query is negated and
//! the clause set is saturated by binary resolution until the empty clause is
//! derived, nothing new can be derived, or the iteration budget runs out.
//!
//! ```
//! use resolute::{prove_entailment, Clause, Literal, ProverConfig, Term, Verdict};
//!
//! let kb = vec![
//!     Clause::unit(Literal::positive("Man", vec![Term::constant("socrates")])),
//!     Clause::new(vec![
//!         Literal::negative("Man", vec![Term::var("x")]),
//!         Literal::positive("Mortal", vec![Term::var("x")]),
//!     ]),
//! ];
//! let query = Literal::positive("Mortal", vec![Term::constant("socrates")]);
//! let outcome = prove_entailment(&kb, &query, &ProverConfig::default())?;
//! assert_eq!(outcome.verdict, Verdict::Proved);
//! # Ok::<(), resolute::ResoluteError>(())
//! ```

pub mod config;
pub mod error;
pub mod fol;
pub mod inference;
pub mod json;
pub mod problems;
pub mod saturation;
pub mod simplifying;
pub mod unification;

pub use config::ProverConfig;
pub use error::{ResoluteError, Result};

// Re-export commonly used types from fol
pub use fol::{Clause, Literal, Substitution, Term, Variable};

// Re-export inference types
pub use inference::{resolve, standardize_apart, Derivation, Proof, ProofStep, VariableRenamer};

// Re-export saturation types
pub use saturation::{
    prove_entailment, InconclusiveReason, ProofOutcome, RoundTrace, SaturationState,
    SaturationTrace, Verdict,
};

pub use problems::Problem;
pub use unification::{unify, unify_literals, unify_terms, UnificationError, UnificationResult};
