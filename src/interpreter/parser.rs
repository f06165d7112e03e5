/// Parser entry points and list splitting.
///
/// Holds the `Parser` struct, the tokenizing front end, the top-level comma
/// list handling, and the trailing-token check.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for all binary operators, from logical
/// `and`/`or` at the bottom to exponentiation at the top.
pub mod binary;

/// Unary operators and primary expressions.
///
/// Handles unary negation, terminal classification, coordinate indexing, and
/// unary function application.
pub mod primary;
