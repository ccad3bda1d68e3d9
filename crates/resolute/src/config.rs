//! Prover configuration types.

use crate::error::{ResoluteError, Result};

/// Budget used by the source worked example
pub const DEFAULT_MAX_ITERATIONS: usize = 20_000;

/// Configuration for the saturation loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverConfig {
    /// Maximum number of pairwise resolution attempts before giving up
    pub max_iterations: usize,
    /// Record the clauses added in each round
    pub record_trace: bool,
}

impl ProverConfig {
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        ProverConfig {
            max_iterations,
            ..Self::default()
        }
    }

    /// Reject budgets that could never attempt a resolution
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ResoluteError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            record_trace: false,
        }
    }
}
