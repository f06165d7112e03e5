#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing, parsing, or terminal
/// registration.
///
/// Every variant carries the byte offset of the offending text in the source
/// string so that failures remain debuggable against the original
/// configuration entry. No partial tree is ever returned alongside an error.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset of the token in the source string.
        offset: usize,
    },
    /// Reached the end of input while an operand or delimiter was still
    /// expected.
    UnexpectedEndOfInput {
        /// Byte offset at which input ended.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unterminated group or call.
        offset: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset of the extra token.
        offset: usize,
    },
    /// A name token is neither a literal, a reserved symbol, nor a registered
    /// custom terminal.
    UnknownTerminal {
        /// The unresolvable name.
        name:   String,
        /// Byte offset of the name.
        offset: usize,
    },
    /// A call `name(` used a name that is not a known unary function.
    UnknownFunction {
        /// The unresolvable function name.
        name:   String,
        /// Byte offset of the name.
        offset: usize,
    },
    /// A coordinate index outside `x[0]`..`x[2]` was used.
    CoordinateIndexOutOfRange {
        /// The index that was requested.
        index:  usize,
        /// Byte offset of the index.
        offset: usize,
    },
    /// Tried to register a custom terminal under a reserved name.
    IdentifierReserved {
        /// The reserved name.
        name: String,
    },
    /// Tried to register the same custom terminal twice.
    DuplicateTerminal {
        /// The already-registered name.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Error at offset {offset}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at offset {offset}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, offset } => write!(f,
                                                                       "Error at offset {offset}: Extra tokens after expression. Check your input: {token}"),

            Self::UnknownTerminal { name, offset } => write!(f,
                                                             "Error at offset {offset}: '{name}' is not a literal, a reserved symbol, or a registered terminal."),

            Self::UnknownFunction { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown function '{name}'.")
            },

            Self::CoordinateIndexOutOfRange { index, offset } => write!(f,
                                                                        "Error at offset {offset}: Coordinate index {index} is out of range; only x[0], x[1] and x[2] exist."),

            Self::IdentifierReserved { name } => {
                write!(f, "Terminal name '{name}' is reserved.")
            },
            Self::DuplicateTerminal { name } => {
                write!(f, "Terminal '{name}' is already registered.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
