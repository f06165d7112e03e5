#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised while evaluating a tree.
///
/// Every variant carries the byte offset of the node that failed, taken from
/// the source string the tree was parsed from. `UnboundTerminal` is the only
/// recoverable case: the caller may supply the missing binding and retry.
pub enum EvalError {
    /// A custom terminal was used but has no bound value yet.
    UnboundTerminal {
        /// The unbound terminal name.
        name:   String,
        /// Byte offset of the terminal.
        offset: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the division.
        offset: usize,
    },
    /// A value was outside the domain of a unary function, or a power had no
    /// real result.
    DomainError {
        /// Details about the violated domain.
        details: String,
        /// Byte offset of the application.
        offset:  usize,
    },
    /// An operator was applied to values of incompatible types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// Byte offset of the operation.
        offset:  usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// Byte offset of the operand.
        offset: usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// Byte offset of the operand.
        offset: usize,
    },
    /// Two sequences of different lengths were combined elementwise.
    LengthMismatch {
        /// Length of the left sequence.
        left:   usize,
        /// Length of the right sequence.
        right:  usize,
        /// Byte offset of the operation.
        offset: usize,
    },
    /// A field value reached an operator but the binding set carries no field
    /// backend.
    FieldBackendMissing {
        /// Byte offset of the operation.
        offset: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundTerminal { name, offset } => write!(f,
                                                             "Error at offset {offset}: Terminal '{name}' has no bound value."),

            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
            Self::DomainError { details, offset } => {
                write!(f, "Error at offset {offset}: {details}.")
            },
            Self::TypeError { details, offset } => {
                write!(f, "Error at offset {offset}: Type error: {details}.")
            },
            Self::ExpectedNumber { offset } => {
                write!(f, "Error at offset {offset}: Expected number.")
            },
            Self::ExpectedBoolean { offset } => {
                write!(f, "Error at offset {offset}: Expected boolean.")
            },
            Self::LengthMismatch { left, right, offset } => write!(f,
                                                                   "Error at offset {offset}: Cannot combine sequences of different lengths: {left} vs {right}."),

            Self::FieldBackendMissing { offset } => write!(f,
                                                           "Error at offset {offset}: Expression produced a field value but no field backend is attached."),
        }
    }
}

impl std::error::Error for EvalError {}
