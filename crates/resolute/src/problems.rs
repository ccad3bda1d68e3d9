//! Built-in example problems

use crate::config::ProverConfig;
use crate::error::{ResoluteError, Result};
use crate::fol::{Clause, Literal, Term};
use crate::saturation::{prove_entailment, ProofOutcome};
use serde::{Deserialize, Serialize};

/// A knowledge base together with the query to prove from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub name: String,
    pub knowledge_base: Vec<Clause>,
    pub query: Literal,
}

impl Problem {
    pub fn prove(&self, config: &ProverConfig) -> Result<ProofOutcome> {
        prove_entailment(&self.knowledge_base, &self.query, config)
    }
}

/// Names accepted by [`builtin`]
pub const BUILTIN_NAMES: &[&str] = &["john-likes-peanuts", "distinct-constants", "successor-chain"];

/// Look up a built-in problem by name
pub fn builtin(name: &str) -> Result<Problem> {
    match name {
        "john-likes-peanuts" => Ok(john_likes_peanuts()),
        "distinct-constants" => Ok(distinct_constants()),
        "successor-chain" => Ok(successor_chain()),
        _ => Err(ResoluteError::UnknownProblem(name.to_string())),
    }
}

fn c(name: &str) -> Term {
    Term::constant(name)
}

fn v(name: &str) -> Term {
    Term::var(name)
}

/// John likes all food; peanuts are eaten by Anil without killing him.
///
/// Proves `Likes(John, peanuts)`.
pub fn john_likes_peanuts() -> Problem {
    let pos = Literal::positive;
    let neg = Literal::negative;
    let knowledge_base = vec![
        // Anything that is food is liked by John
        Clause::new(vec![neg("Food", vec![v("x")]), pos("Likes", vec![c("John"), v("x")])]),
        Clause::unit(pos("Food", vec![c("apple")])),
        Clause::unit(pos("Food", vec![c("vegetable")])),
        // Anything eaten that doesn't kill is food
        Clause::new(vec![
            neg("Eats", vec![v("x"), v("y")]),
            pos("Killed", vec![v("y")]),
            pos("Food", vec![v("y")]),
        ]),
        Clause::unit(pos("Eats", vec![c("Anil"), c("peanuts")])),
        Clause::unit(pos("Alive", vec![c("Anil")])),
        // Harry eats everything Anil eats
        Clause::new(vec![
            neg("Eats", vec![c("Anil"), v("x")]),
            pos("Eats", vec![c("Harry"), v("x")]),
        ]),
        // Alive means not killed, and not killed means alive
        Clause::new(vec![neg("Alive", vec![v("x")]), neg("Killed", vec![v("x")])]),
        Clause::new(vec![neg("Killed", vec![v("x")]), pos("Alive", vec![v("x")])]),
    ];

    Problem {
        name: "john-likes-peanuts".into(),
        knowledge_base,
        query: pos("Likes", vec![c("John"), c("peanuts")]),
    }
}

/// `P(a)` says nothing about `b`: saturates without a refutation.
pub fn distinct_constants() -> Problem {
    Problem {
        name: "distinct-constants".into(),
        knowledge_base: vec![Clause::unit(Literal::positive("P", vec![c("a")]))],
        query: Literal::positive("P", vec![c("b")]),
    }
}

/// `Nat(zero)` and `Nat(x) -> Nat(s(x))` never saturate, and `Nat(nil)`
/// is not derivable, so only the budget ends the search.
pub fn successor_chain() -> Problem {
    let s = |t: Term| Term::function("s", vec![t]);
    Problem {
        name: "successor-chain".into(),
        knowledge_base: vec![
            Clause::unit(Literal::positive("Nat", vec![c("zero")])),
            Clause::new(vec![
                Literal::negative("Nat", vec![v("x")]),
                Literal::positive("Nat", vec![s(v("x"))]),
            ]),
        ],
        query: Literal::positive("Nat", vec![c("nil")]),
    }
}
