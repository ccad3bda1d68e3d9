//! Per-round record of a saturation run.

use crate::fol::Clause;
use serde::{Deserialize, Serialize};

/// What one saturation round did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTrace {
    /// 1-based round number
    pub round: usize,
    /// Resolution attempts made during the round
    pub attempts: usize,
    /// Clauses appended to the clause set by the round.
    ///
    /// A round that derives the empty clause stops there: only the empty
    /// clause is appended, and the other resolvents it found are dropped.
    pub added: Vec<Clause>,
}

/// Rounds of a saturation run, in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaturationTrace {
    pub rounds: Vec<RoundTrace>,
}

impl SaturationTrace {
    pub fn new() -> Self {
        SaturationTrace { rounds: Vec::new() }
    }

    pub fn record(&mut self, round: usize, attempts: usize, added: Vec<Clause>) {
        self.rounds.push(RoundTrace {
            round,
            attempts,
            added,
        });
    }

    /// Total resolution attempts across all rounds
    pub fn total_attempts(&self) -> usize {
        self.rounds.iter().map(|r| r.attempts).sum()
    }

    /// Total clauses derived across all rounds
    pub fn total_added(&self) -> usize {
        self.rounds.iter().map(|r| r.added.len()).sum()
    }
}
