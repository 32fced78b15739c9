//! # symrun
//!
//! symrun is a symbolic execution engine for a minimal imperative language.
//! It parses a single function and explores every control-flow path through
//! it, forking the set of live execution states at each conditional. Values
//! are never computed numerically; every variable carries a textual
//! expression built by substitution, and each path reports its final
//! bindings, its accumulated path condition and its rendered return
//! expression.

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
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt::Write;

use crate::interpreter::{executor::Executor, lexer::Lexer, parser::core::parse_function};

/// Defines the structure of parsed code.
///
/// This module declares the types that represent the syntactic structure of
/// a source function as a tree: the primitive types, the operators, the
/// left-deep expression chains, statements and the function itself. The AST
/// is built by the parser and traversed by the executor.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps variable references by name, so per-path memory can be mutated
///   independently of the shared tree.
pub mod ast;
/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or symbolically executing code. Errors are fatal; the first one aborts
/// the whole run with a short human-readable reason.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, executor).
/// - Attaches line numbers to parse errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of symbolic execution.
///
/// This module ties together lexing, word reading, parsing and path
/// execution to turn one source function into a report of every
/// control-flow path through it.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, word reader, parser, executor.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a source program and returns the per-path report.
///
/// The source must contain exactly one function. The report holds one block
/// per discovered path, in discovery order: the parameter bindings, the
/// rendered return expression and the path condition.
///
/// # Errors
/// Returns an error if parsing fails, if the function never reaches a
/// return expression, or if execution trips an internal lookup failure.
///
/// # Examples
/// ```
/// use symrun::run_source;
///
/// let report = run_source("f(int x): int { return x }").unwrap();
/// assert!(report.contains("output: 'x'"));
/// assert!(report.contains("condition: true"));
///
/// // A function that never returns is rejected before execution.
/// let res = run_source("f(int x): int { x = x }");
/// assert!(res.is_err());
/// ```
pub fn run_source(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut lexer = Lexer::new(source);
    let func = parse_function(&mut lexer)?;
    let executor = Executor::new(func)?;

    let mut report = String::new();
    for path in executor.run()? {
        write!(report, "{path}")?;
    }

    Ok(report)
}
