//! # caesium
//!
//! caesium is an interpreter for boolean algebra written in Rust.
//! It evaluates one line at a time: literals, variables, `not`, `and`, `or`,
//! `xor`, `nand`, `nor`, parentheses, assignment and the `random`, `exit`
//! and `help` builtins.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        environment::Environment,
        evaluator::core::{Signal, evaluate},
        lexer::tokenize,
        parser::build_tree,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` type: a token together with its ordered
/// operands. The tree is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, tree
/// building or evaluating a line, along with the flat [`error::ErrorKind`]
/// reported to callers.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Produces the messages shown to the user.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together lexing, tree building, the environment and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// What evaluating a single line came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// The line evaluated to a boolean.
    Value(bool),
    /// The line asked for help; carries the text to show.
    Help(String),
    /// The line asked to end the session.
    Exit,
    /// The line failed; carries the kind and the message to show.
    Error(ErrorKind, String),
}

impl std::fmt::Display for LineResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Help(text) | Self::Error(_, text) => f.write_str(text),
            Self::Exit => Ok(()),
        }
    }
}

impl From<Error> for LineResult {
    fn from(e: Error) -> Self {
        Self::Error(e.kind(), e.to_string())
    }
}

impl From<Signal> for LineResult {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Exit => Self::Exit,
            Signal::Help(text) => Self::Help(text),
            Signal::Error(e) => e.into(),
        }
    }
}

/// Evaluates one line of source text against `env`.
///
/// Runs the lexer, the tree builder and the evaluator in turn. The first
/// failure of any stage ends the line; nothing is ever fatal, so the caller
/// can report the message and carry on with the next line. Only successful
/// assignments change `env`.
///
/// # Examples
/// ```
/// use caesium::{LineResult, error::ErrorKind, interpreter::environment::Environment, run_line};
///
/// let mut env = Environment::new();
/// assert_eq!(run_line("X = true", &mut env), LineResult::Value(true));
/// assert_eq!(run_line("x nand 1", &mut env), LineResult::Value(false));
/// assert_eq!(run_line("exit", &mut env), LineResult::Exit);
///
/// match run_line("true = false", &mut env) {
///     LineResult::Error(kind, message) => {
///         assert_eq!(kind, ErrorKind::ReservedName);
///         assert_eq!(message, "Name \"true\" is reserved.");
///     },
///     other => panic!("unexpected result {other:?}"),
/// }
/// ```
pub fn run_line(text: &str, env: &mut Environment) -> LineResult {
    let tree = match tokenize(text).and_then(build_tree) {
        Ok(tree) => tree,
        Err(e) => {
            debug!("rejected {text:?}: {e}");
            return Error::from(e).into();
        },
    };

    match evaluate(&tree, env) {
        Ok(value) => LineResult::Value(value),
        Err(signal) => signal.into(),
    }
}
