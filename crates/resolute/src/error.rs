//! Error types for Resolute

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResoluteError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Symbol '{symbol}' used with arity {found}, but earlier with arity {expected}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("Literal with an empty predicate name")]
    EmptyPredicate,

    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResoluteError>;
