/// Represents a spatial coordinate axis.
///
/// The reserved terminals `x`, `y` and `z` (and their indexed aliases `x[0]`,
/// `x[1]`, `x[2]`) resolve to one of these axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// The first spatial coordinate (`x`, `x[0]`).
    X,
    /// The second spatial coordinate (`y`, `x[1]`).
    Y,
    /// The third spatial coordinate (`z`, `x[2]`).
    Z,
}

impl Axis {
    /// Returns the zero-based index of this axis.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// A leaf token of an expression tree.
///
/// Terminals are classified at parse time in a fixed order: boolean literal,
/// numeric literal, quoted string literal, reserved coordinate symbol, and
/// finally a registered custom-terminal name. A token matching none of these
/// is rejected by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Terminal {
    /// A numeric literal. All numbers follow IEEE double semantics.
    Real(f64),
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// A quoted string literal, without its quotes.
    Str(String),
    /// A reserved spatial coordinate symbol.
    Coordinate(Axis),
    /// The reserved time symbol `t`.
    Time,
    /// A custom terminal whose value is supplied at evaluation time.
    Custom(String),
}

/// A node of a parsed field expression.
///
/// A tree is built once per configuration entry and is structurally immutable
/// afterwards; only its evaluation outputs vary across calls with different
/// binding sets. Children are exclusively owned by their parent, and every
/// variant records the byte offset of the source text it was parsed from so
/// that evaluation errors stay debuggable against the configuration string.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A binary operation such as `a + b`.
    Expression {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator in the source string.
        offset: usize,
    },
    /// A unary function application such as `sqrt(a)` or a negation `-a`.
    Unary {
        /// The function being applied.
        func:    UnaryFunction,
        /// The operand expression.
        operand: Box<Self>,
        /// Byte offset in the source string.
        offset:  usize,
    },
    /// An ordered sequence of sibling expressions, split on depth-0 commas.
    List {
        /// The list items, in source order.
        items:  Vec<Self>,
        /// Byte offset of the first item.
        offset: usize,
    },
    /// A leaf terminal.
    Terminal {
        /// The classified terminal.
        terminal: Terminal,
        /// Byte offset in the source string.
        offset:   usize,
    },
}

impl Node {
    /// Gets the source byte offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use fieldexpr::ast::{Node, Terminal};
    ///
    /// let node = Node::Terminal { terminal: Terminal::Real(2.5),
    ///                             offset:   7, };
    ///
    /// assert_eq!(node.offset(), 7);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Expression { offset, .. }
            | Self::Unary { offset, .. }
            | Self::List { offset, .. }
            | Self::Terminal { offset, .. } => *offset,
        }
    }
}

/// Represents a binary operator.
///
/// The set is closed: operator discovery happens at parse time and evaluation
/// dispatches through an exhaustive match, so no runtime lookup can fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the operator priority, low to high.
    ///
    /// Lower-priority operators are applied last. Operators of equal priority
    /// associate to the left, including `^`.
    ///
    /// ## Example
    /// ```
    /// use fieldexpr::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Add.priority() < BinaryOperator::Mul.priority());
    /// assert_eq!(BinaryOperator::And.priority(), BinaryOperator::Or.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::And | Self::Or => 1,
            Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual => 2,
            Self::Add | Self::Sub => 3,
            Self::Mul | Self::Div => 4,
            Self::Pow => 5,
        }
    }
}

/// Represents a unary function.
///
/// Unary functions bind tighter than any binary operator. Function names form
/// a closed set resolved at parse time; an unrecognized `name(` fails with an
/// unknown-function error rather than at evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryFunction {
    /// Arithmetic negation (`-a`).
    Neg,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Natural exponential.
    Exp,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
    /// Square root.
    Sqrt,
    /// Absolute value.
    Abs,
    /// Numeric sign (`-1`, `0` or `1`).
    Sign,
    /// Round towards negative infinity.
    Floor,
    /// Round towards positive infinity.
    Ceil,
    /// Round to the nearest integer.
    Round,
}

impl UnaryFunction {
    /// Resolves a function name to its variant, or `None` if the name is not
    /// a known unary function.
    ///
    /// Negation has no name; the parser produces it from a leading `-`.
    ///
    /// ## Example
    /// ```
    /// use fieldexpr::ast::UnaryFunction;
    ///
    /// assert_eq!(UnaryFunction::from_name("sqrt"), Some(UnaryFunction::Sqrt));
    /// assert_eq!(UnaryFunction::from_name("gamma"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            "sign" => Self::Sign,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            _ => return None,
        };
        Some(func)
    }

    /// Returns the source-level name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Sign => "sign",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Coordinate(Axis::X) => write!(f, "x"),
            Self::Coordinate(Axis::Y) => write!(f, "y"),
            Self::Coordinate(Axis::Z) => write!(f, "z"),
            Self::Time => write!(f, "t"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

impl std::fmt::Display for Node {
    /// Renders the tree in a fully parenthesized form.
    ///
    /// Every binary expression is wrapped in one pair of parentheses, which
    /// makes the applied precedence and associativity visible:
    /// `1 - 2 - 3` renders as `((1-2)-3)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression { op, left, right, .. } => write!(f, "({left}{op}{right})"),
            Self::Unary { func: UnaryFunction::Neg,
                          operand,
                          .. } => write!(f, "-{operand}"),
            Self::Unary { func, operand, .. } => write!(f, "{func}({operand})"),
            Self::List { items, .. } => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
            Self::Terminal { terminal, .. } => write!(f, "{terminal}"),
        }
    }
}
