//! JSON serialization types for problems and proof outcomes

use crate::error::Result;
use crate::inference::Proof;
use crate::problems::Problem;
use crate::saturation::{ProofOutcome, SaturationTrace, Verdict};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parse a problem from JSON text
pub fn parse_problem(json: &str) -> Result<Problem> {
    Ok(serde_json::from_str(json)?)
}

/// Read a problem from a JSON file
pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem> {
    let text = fs::read_to_string(path)?;
    parse_problem(&text)
}

/// Render a problem as pretty-printed JSON
pub fn problem_to_json(problem: &Problem) -> Result<String> {
    Ok(serde_json::to_string_pretty(problem)?)
}

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub clause_idx: usize,
    pub rule_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub premises: Vec<usize>,
    pub clause: String,
}

/// JSON representation of a proof attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofOutcomeJson {
    pub verdict: Verdict,
    pub iterations: usize,
    pub rounds: usize,
    pub clause_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Vec<ProofStepJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<SaturationTrace>,
}

fn proof_steps(proof: &Proof) -> Vec<ProofStepJson> {
    proof
        .steps
        .iter()
        .map(|step| ProofStepJson {
            clause_idx: step.clause_idx,
            rule_name: step.derivation.rule_name.clone(),
            premises: step.derivation.premises.clone(),
            clause: step.conclusion.to_string(),
        })
        .collect()
}

impl From<&ProofOutcome> for ProofOutcomeJson {
    fn from(outcome: &ProofOutcome) -> Self {
        ProofOutcomeJson {
            verdict: outcome.verdict,
            iterations: outcome.iterations,
            rounds: outcome.rounds,
            clause_count: outcome.clauses.len(),
            proof: outcome.proof.as_ref().map(proof_steps),
            trace: outcome.trace.clone(),
        }
    }
}

/// Render a proof outcome as pretty-printed JSON
pub fn outcome_to_json(outcome: &ProofOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ProofOutcomeJson::from(outcome))?)
}
