//! # fieldexpr
//!
//! fieldexpr is an expression engine for configuration-driven field
//! definitions. It parses arithmetic expressions with spatial coordinates,
//! time and named terminals into immutable trees, and evaluates them later
//! against a set of supplied values, optionally delegating field arithmetic
//! to a numerical backend.

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

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::Bindings, parser::core::Parser, value::core::Value},
    registry::TerminalRegistry,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and related types that represent a
/// configuration expression as a tree. The tree is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node, terminal, operator and function types for all supported
///   constructs.
/// - Attaches source byte offsets to tree nodes for error reporting.
/// - Renders trees back to fully parenthesized text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, descriptions,
/// and source offsets for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression handling.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete engine for configuration expressions. It exposes the
/// public API for building and evaluating expression trees.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Manages the set of recognized custom terminal names.
///
/// This module declares the registry the parser consults to classify bare
/// identifiers. Names are registered before parsing; reserved symbols and
/// duplicates are rejected at registration time.
///
/// # Responsibilities
/// - Stores registered custom terminal names.
/// - Rejects reserved and duplicate names with parse errors.
pub mod registry;

/// Parses one configuration expression into a tree.
///
/// This is the convenience entry point wrapping [`Parser`]. The registry
/// decides which bare identifiers are valid custom terminals; everything
/// else follows the fixed grammar.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or names an unknown
/// terminal or function.
///
/// # Examples
/// ```
/// use fieldexpr::{parse, registry::TerminalRegistry};
///
/// let registry = TerminalRegistry::new();
///
/// let tree = parse("1 - 2 - 3", &registry).unwrap();
/// assert_eq!(tree.to_string(), "((1-2)-3)");
///
/// // 'q' was never registered.
/// assert!(parse("q + 1", &registry).is_err());
/// ```
pub fn parse(source: &str, registry: &TerminalRegistry) -> Result<ast::Node, ParseError> {
    Parser::new(registry).parse(source)
}

/// Parses and immediately evaluates an expression with no custom terminals.
///
/// Useful for constant-valued configuration entries. Expressions that depend
/// on custom terminals need the full parse-bind-evaluate flow instead.
///
/// # Errors
/// Returns the error of whichever phase fails, parse or evaluation.
///
/// # Examples
/// ```
/// use fieldexpr::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Real(14.0));
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let registry = TerminalRegistry::new();
    let tree = parse(source, &registry).map_err(Box::new)?;
    let value = tree.evaluate(&Bindings::new()).map_err(Box::new)?;
    Ok(value)
}
