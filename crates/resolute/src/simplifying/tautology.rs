//! Tautology detection.
//!
//! A clause holding a literal together with its exact negation is true in
//! every interpretation and can never contribute to a refutation.

use crate::fol::Clause;

/// Check if a clause contains a complementary pair of identical atoms
pub fn is_tautology(clause: &Clause) -> bool {
    clause
        .literals()
        .filter(|lit| lit.polarity)
        .any(|lit| clause.contains(&lit.complement()))
}
