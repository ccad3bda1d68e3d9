//! First-order logic data structures
//!
//! This module provides the fundamental types for representing clauses:
//! terms, literals, clauses and substitutions.

pub mod clause;
pub mod literal;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use clause::Clause;
pub use literal::Literal;
pub use substitution::Substitution;
pub use term::{Term, Variable};
