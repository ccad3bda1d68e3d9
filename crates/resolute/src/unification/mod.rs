//! Unification algorithm for first-order terms and literals

mod mgu;

#[cfg(test)]
mod proptest_tests;

pub use mgu::{unify, unify_literals, unify_terms, UnificationError, UnificationResult};
