//! Main saturation state and algorithm
//!
//! A breadth-first, exhaustive saturation loop over a growing clause set.
//!
//! ## Algorithm
//!
//! The clause set starts as the knowledge base plus the negated query. Each
//! round:
//!
//! 1. **Resolve**: every unordered pair of clauses not resolved in an earlier
//!    round is resolved once. A pair `(i, j)` with `i < j` is new exactly when
//!    `j` is at or past the frontier, the size of the clause set when the
//!    previous round started; clauses are only ever appended, so this visits
//!    every pair exactly once across the run.
//! 2. **Check**: deriving the empty clause ends the run with `Proved`.
//!    Attempting more resolutions than the budget allows ends it with
//!    `Inconclusive`.
//! 3. **Merge**: resolvents not already in the set are appended. A round that
//!    adds nothing is a fixpoint and ends the run with `Disproved`.

use super::trace::SaturationTrace;
use crate::config::ProverConfig;
use crate::fol::Clause;
use crate::inference::{resolve, Derivation, Proof, VariableRenamer};
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a run stopped without an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InconclusiveReason {
    /// The next resolution attempt would exceed the budget
    IterationBudgetExceeded { budget: usize },
}

/// Terminal state of a proof attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The empty clause was derived: the query is entailed
    Proved,
    /// Saturated without the empty clause: the query is not derivable
    Disproved,
    /// Neither, within the configured budget
    Inconclusive(InconclusiveReason),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Proved => write!(f, "proved (derived the empty clause)"),
            Verdict::Disproved => write!(f, "disproved (no new clauses can be derived)"),
            Verdict::Inconclusive(InconclusiveReason::IterationBudgetExceeded { budget }) => {
                write!(f, "inconclusive (iteration budget of {} exceeded)", budget)
            }
        }
    }
}

/// Everything a proof attempt produced
#[derive(Debug, Clone)]
pub struct ProofOutcome {
    pub verdict: Verdict,
    /// Resolution attempts made
    pub iterations: usize,
    /// Rounds started
    pub rounds: usize,
    /// The final clause set, in insertion order
    pub clauses: Vec<Clause>,
    /// How each clause in `clauses` was obtained
    pub derivations: Vec<Derivation>,
    /// The refutation, when the verdict is `Proved`
    pub proof: Option<Proof>,
    /// Per-round record, when requested in the config
    pub trace: Option<SaturationTrace>,
}

impl ProofOutcome {
    pub fn is_proved(&self) -> bool {
        self.verdict == Verdict::Proved
    }

    /// Number of clauses obtained by resolution
    pub fn derived_count(&self) -> usize {
        self.derivations.iter().filter(|d| !d.is_input()).count()
    }
}

/// Outcome of a single round
enum RoundResult {
    Proved { empty_clause_idx: usize },
    Exhausted,
    Fixpoint,
    Progress,
}

/// Saturation state for one proof attempt
pub struct SaturationState {
    /// All clauses, indexed by insertion order
    clauses: IndexSet<Clause>,
    /// Parallel to `clauses`
    derivations: Vec<Derivation>,
    config: ProverConfig,
    /// Fresh-variable source, scoped to this attempt
    renamer: VariableRenamer,
    iterations: usize,
    rounds: usize,
    /// Pairs with both indices below this were resolved in earlier rounds
    frontier: usize,
    trace: Option<SaturationTrace>,
}

impl SaturationState {
    /// Create a new saturation state.
    ///
    /// # Arguments
    /// * `knowledge_base` - The input clauses
    /// * `negated_query` - The unit clause holding the negated query
    /// * `config` - Saturation configuration
    pub fn new(
        knowledge_base: impl IntoIterator<Item = Clause>,
        negated_query: Clause,
        config: ProverConfig,
    ) -> Self {
        let mut state = SaturationState {
            clauses: IndexSet::new(),
            derivations: Vec::new(),
            trace: config.record_trace.then(SaturationTrace::new),
            config,
            renamer: VariableRenamer::new(),
            iterations: 0,
            rounds: 0,
            frontier: 0,
        };

        for clause in knowledge_base {
            state.add_clause(clause, Derivation::input());
        }
        state.add_clause(negated_query, Derivation::negated_query());
        state
    }

    /// Append a clause unless already present; returns its index if added
    fn add_clause(&mut self, clause: Clause, derivation: Derivation) -> Option<usize> {
        let (idx, inserted) = self.clauses.insert_full(clause);
        if inserted {
            self.derivations.push(derivation);
            Some(idx)
        } else {
            None
        }
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Run the loop to a terminal state
    pub fn saturate(mut self) -> ProofOutcome {
        info!(
            "Starting saturation with {} clauses (budget {})",
            self.clauses.len(),
            self.config.max_iterations
        );

        // The input may already be contradictory
        if let Some(idx) = self.clauses.iter().position(Clause::is_empty) {
            info!("Input contains the empty clause");
            return self.finish(Verdict::Proved, Some(idx));
        }

        loop {
            match self.run_round() {
                RoundResult::Proved { empty_clause_idx } => {
                    return self.finish(Verdict::Proved, Some(empty_clause_idx));
                }
                RoundResult::Exhausted => {
                    let reason = InconclusiveReason::IterationBudgetExceeded {
                        budget: self.config.max_iterations,
                    };
                    return self.finish(Verdict::Inconclusive(reason), None);
                }
                RoundResult::Fixpoint => return self.finish(Verdict::Disproved, None),
                RoundResult::Progress => {}
            }
        }
    }

    fn run_round(&mut self) -> RoundResult {
        self.rounds += 1;
        let n = self.clauses.len();
        let start_iterations = self.iterations;
        let mut pending: IndexMap<Clause, Derivation> = IndexMap::new();

        for i in 0..n {
            for j in (i + 1).max(self.frontier)..n {
                if self.iterations >= self.config.max_iterations {
                    debug!(
                        "Round {}: budget of {} attempts exhausted",
                        self.rounds, self.config.max_iterations
                    );
                    self.record_round(start_iterations, Vec::new());
                    return RoundResult::Exhausted;
                }
                self.iterations += 1;

                let resolvents = resolve(&self.clauses[i], &self.clauses[j], &mut self.renamer);
                for resolvent in resolvents {
                    if resolvent.is_empty() {
                        info!(
                            "Derived the empty clause from clauses {} and {} after {} attempts",
                            i, j, self.iterations
                        );
                        // Pending clauses of this round are never merged,
                        // so the round's trace holds only the empty clause
                        self.record_round(start_iterations, vec![resolvent.clone()]);
                        let (empty_clause_idx, inserted) = self.clauses.insert_full(resolvent);
                        // saturate() returns early when the input holds the empty clause
                        debug_assert!(inserted);
                        if inserted {
                            self.derivations.push(Derivation::resolution(i, j));
                        }
                        return RoundResult::Proved { empty_clause_idx };
                    }
                    if !self.clauses.contains(&resolvent) && !pending.contains_key(&resolvent) {
                        trace!("{} + {} => {}", i, j, resolvent);
                        pending.insert(resolvent, Derivation::resolution(i, j));
                    }
                }
            }
        }

        debug!(
            "Round {}: {} attempts, {} new clauses",
            self.rounds,
            self.iterations - start_iterations,
            pending.len()
        );

        if pending.is_empty() {
            self.record_round(start_iterations, Vec::new());
            return RoundResult::Fixpoint;
        }

        self.frontier = n;
        if self.trace.is_some() {
            let added = pending.keys().cloned().collect();
            self.record_round(start_iterations, added);
        }
        for (clause, derivation) in pending {
            self.add_clause(clause, derivation);
        }
        RoundResult::Progress
    }

    fn record_round(&mut self, start_iterations: usize, added: Vec<Clause>) {
        let attempts = self.iterations - start_iterations;
        if let Some(trace) = self.trace.as_mut() {
            trace.record(self.rounds, attempts, added);
        }
    }

    fn finish(self, verdict: Verdict, empty_clause_idx: Option<usize>) -> ProofOutcome {
        info!(
            "Saturation finished: {} after {} attempts in {} rounds ({} clauses, {} fresh variables)",
            verdict,
            self.iterations,
            self.rounds,
            self.clauses.len(),
            self.renamer.issued()
        );
        let clauses: Vec<Clause> = self.clauses.into_iter().collect();
        let proof = empty_clause_idx.map(|idx| Proof::extract(&clauses, &self.derivations, idx));
        ProofOutcome {
            verdict,
            iterations: self.iterations,
            rounds: self.rounds,
            clauses,
            derivations: self.derivations,
            proof,
            trace: self.trace,
        }
    }
}
