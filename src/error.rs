//! Error kinds for every fatal stage of spec assembly and search.
//!
//! [`EvalError`](crate::interpreter::EvalError) is deliberately not part of
//! this enum: it is caught by the decider and turned into a rejection, never
//! bubbled up to a caller.

use crate::util::Position;
use thiserror::Error;

/// Grammar text failed to tokenize or parse.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("unexpected character at {at}: {message}")]
    Parse { at: Position, message: String },
    #[error("malformed statement at {at}: {message}")]
    ParseTree { at: Position, message: String },
    #[error("malformed program signature: {message}")]
    BadSignature { message: String },
}

/// Spec assembly violated one of its construction invariants.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("type `{0}` is already defined")]
    DuplicateType(String),
    #[error("type `{0}` is not defined")]
    UnknownType(String),
    #[error("program input/output type `{0}` is not a value type")]
    NotAValueType(String),
}

/// Construction of an AST node violated one of its invariants. Indicates a
/// bug in the enumerator, never user input.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("production {production:?} expects {expected} children, got {actual}")]
    ArityMismatch {
        production: crate::production::ProductionId,
        expected: usize,
        actual: usize,
    },
    #[error("child {index} of production {production:?} has type `{actual}`, expected `{expected}`")]
    TypeMismatch {
        production: crate::production::ProductionId,
        index: usize,
        expected: String,
        actual: String,
    },
}

/// Internal failure of the backtracking constraint solver.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("solver template depth {0} is too deep to represent with a u32 position index")]
    TemplateOverflow(usize),
    #[error("solver reached an inconsistent state: {0}")]
    Internal(String),
}

/// Top-level error type returned by synthesis; every fatal error case is a
/// variant here, `#[from]`-wrapping the more specific enums above.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Ast(#[from] AstError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}
