//! Inference rules for resolution theorem proving

pub mod common;
pub mod derivation;
pub mod proof;
pub mod resolution;

pub use common::{standardize_apart, VariableRenamer};
pub use derivation::Derivation;
pub use proof::{Proof, ProofStep};
pub use resolution::resolve;
