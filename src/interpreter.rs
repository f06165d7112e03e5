/// The evaluator module walks built trees and computes values.
///
/// The evaluator traverses an immutable expression tree against a binding
/// set, performs arithmetic, comparisons and logical operations, applies
/// unary functions, and dispatches field-valued operands to the attached
/// backend. It is the deferred-execution half of the engine.
///
/// # Responsibilities
/// - Evaluates tree nodes, performing all supported operations.
/// - Resolves terminals: literals, coordinates, time, and custom bindings.
/// - Reports evaluation errors such as division by zero or unbound terminals.
pub mod evaluator;
/// The lexer module tokenizes a configuration expression.
///
/// The lexer reads the raw expression text and produces a stream of tokens
/// with their byte offsets: numbers, booleans, quoted strings, identifiers,
/// operators and delimiters. This is the first stage of parsing.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Handles numeric literals (including scientific notation), quoted
///   strings, identifiers and keywords.
/// - Surfaces invalid characters so the parser can reject the entry.
pub mod lexer;
/// The parser module builds an expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the `Node` tree representing one configuration entry: top-level comma
/// lists, the binary operator precedence ladder, unary functions, and
/// terminal classification against an explicit terminal registry.
///
/// # Responsibilities
/// - Converts tokens into structured tree nodes.
/// - Enforces precedence, left-associativity and depth-0 comma splitting.
/// - Rejects unknown terminals and malformed syntax with source offsets.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types an evaluation can produce: numbers,
/// booleans, strings, ordered sequences, and opaque field objects, together
/// with the backend trait through which field arithmetic is delegated.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion helpers and error checking.
/// - Declares the `FieldOps` seam to the numerical backend.
pub mod value;
