//! Simplification checks applied to freshly derived clauses.

pub mod tautology;

pub use tautology::is_tautology;
