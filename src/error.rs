/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// configuration expression, as well as terminal-registration failures. Parse
/// errors include syntax mistakes, unexpected tokens, and unknown terminal or
/// function names, all detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a built tree.
/// Evaluation errors include unbound custom terminals, division by zero,
/// invalid function domains, and type mismatches.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
