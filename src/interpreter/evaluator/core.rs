use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Node, Terminal},
    error::EvalError,
    interpreter::{
        evaluator::{binary::eval_binary, function::apply_function},
        value::{core::Value, field::FieldOps},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the evaluation context for one or more expression trees.
///
/// A binding set holds the values supplied for custom terminals, the current
/// spatial position and time for the reserved symbols, and an optional
/// numerical backend for field-valued operands.
///
/// ## Usage
///
/// A `Bindings` is created once and reused across evaluations. Trees are
/// immutable, so evaluating the same tree twice with the same bindings
/// produces the same value.
///
/// ```
/// use fieldexpr::{
///     interpreter::{evaluator::core::Bindings, parser::core::Parser, value::core::Value},
///     registry::TerminalRegistry,
/// };
///
/// let mut registry = TerminalRegistry::new();
/// registry.register("p").unwrap();
///
/// let tree = Parser::new(&registry).parse("p * 2").unwrap();
///
/// let mut bindings = Bindings::new();
/// assert!(!tree.is_ready(&bindings));
///
/// bindings.supply("p", 21.0.into());
/// assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(42.0));
/// ```
pub struct Bindings {
    /// Values supplied for custom terminals, by name.
    values:   HashMap<String, Value>,
    /// The current spatial position, substituted for `x`, `y` and `z` when no
    /// backend is attached.
    position: [f64; 3],
    /// The current time, substituted for `t`.
    time:     f64,
    /// The numerical backend consulted for field operands and, when present,
    /// for the coordinate symbols.
    backend:  Option<Rc<dyn FieldOps>>,
}

impl Bindings {
    /// Creates an empty binding set at the spatial origin and time zero, with
    /// no backend attached.
    #[must_use]
    pub fn new() -> Self {
        Self { values:   HashMap::new(),
               position: [0.0; 3],
               time:     0.0,
               backend:  None, }
    }

    /// Supplies a value for a custom terminal.
    ///
    /// Supplying a name again overwrites the previous value.
    pub fn supply(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Returns the value supplied for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` if a value has been supplied for `name`.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Sets the spatial position substituted for the coordinate symbols.
    pub const fn set_position(&mut self, position: [f64; 3]) {
        self.position = position;
    }

    /// Sets the time substituted for `t`.
    pub const fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Attaches a numerical backend for field operands and coordinates.
    pub fn attach_backend(&mut self, backend: Rc<dyn FieldOps>) {
        self.backend = Some(backend);
    }

    /// Returns the attached backend, if any.
    #[must_use]
    pub fn backend(&self) -> Option<&Rc<dyn FieldOps>> {
        self.backend.as_ref()
    }

    /// Returns the current spatial position.
    #[must_use]
    pub const fn position(&self) -> [f64; 3] {
        self.position
    }

    /// Returns the current time.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new()
    }
}

impl Node {
    /// Evaluates the tree against a binding set and returns the resulting
    /// value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// based on node variant: terminals resolve through the binding set,
    /// lists evaluate item by item into a sequence, and binary and unary
    /// nodes evaluate their operands first and then apply the operation.
    ///
    /// Evaluation does not mutate the tree or the bindings; repeated calls
    /// with the same bindings produce the same value.
    ///
    /// # Parameters
    /// - `bindings`: The binding set resolving custom terminals, position,
    ///   time and the optional backend.
    ///
    /// # Returns
    /// The computed [`Value`], or an `EvalError` carrying the byte offset of
    /// the failing node.
    ///
    /// # Errors
    /// Returns an `EvalError` if a custom terminal is unbound, an operation
    /// receives operands of the wrong type, or a numeric operation leaves its
    /// domain.
    pub fn evaluate(&self, bindings: &Bindings) -> EvalResult<Value> {
        match self {
            Self::Terminal { terminal, offset } => eval_terminal(terminal, bindings, *offset),
            Self::List { items, .. } => {
                let values = items.iter()
                                  .map(|item| item.evaluate(bindings))
                                  .collect::<EvalResult<Vec<_>>>()?;
                Ok(values.into())
            },
            Self::Unary { func, operand, offset } => {
                let value = operand.evaluate(bindings)?;
                apply_function(*func, &value, bindings, *offset)
            },
            Self::Expression { op, left, right, offset } => {
                let left = left.evaluate(bindings)?;
                let right = right.evaluate(bindings)?;
                eval_binary(*op, &left, &right, bindings, *offset)
            },
        }
    }

    /// Reports whether every custom terminal in the tree has a supplied
    /// value.
    ///
    /// Reserved symbols and literals are always ready; only custom terminals
    /// gate readiness. A tree that is not ready would fail evaluation with
    /// `EvalError::UnboundTerminal`.
    ///
    /// # Parameters
    /// - `bindings`: The binding set to check against.
    #[must_use]
    pub fn is_ready(&self, bindings: &Bindings) -> bool {
        self.used_terminals()
            .iter()
            .all(|name| bindings.is_bound(name))
    }

    /// Lists the custom terminal names the tree depends on.
    ///
    /// Names appear in first-occurrence order of a depth-first, left-to-right
    /// walk, each name once.
    ///
    /// ## Example
    /// ```
    /// use fieldexpr::{interpreter::parser::core::Parser, registry::TerminalRegistry};
    ///
    /// let mut registry = TerminalRegistry::new();
    /// registry.register("a").unwrap();
    /// registry.register("b").unwrap();
    ///
    /// let tree = Parser::new(&registry).parse("b + a * b").unwrap();
    /// assert_eq!(tree.used_terminals(), vec!["b", "a"]);
    /// ```
    #[must_use]
    pub fn used_terminals(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_terminals(&mut names);
        names
    }

    fn collect_terminals<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Terminal { terminal: Terminal::Custom(name),
                             .. } => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            },
            Self::Terminal { .. } => {},
            Self::List { items, .. } => {
                for item in items {
                    item.collect_terminals(names);
                }
            },
            Self::Unary { operand, .. } => operand.collect_terminals(names),
            Self::Expression { left, right, .. } => {
                left.collect_terminals(names);
                right.collect_terminals(names);
            },
        }
    }
}

/// Resolves a terminal to its value.
///
/// Literals evaluate to themselves. Coordinates go to the backend when one is
/// attached, otherwise to the binding set's position. Time reads the binding
/// set's clock. Custom terminals look up their supplied value.
fn eval_terminal(terminal: &Terminal, bindings: &Bindings, offset: usize) -> EvalResult<Value> {
    match terminal {
        Terminal::Real(r) => Ok(Value::Real(*r)),
        Terminal::Bool(b) => Ok(Value::Bool(*b)),
        Terminal::Str(s) => Ok(Value::Str(s.clone())),
        Terminal::Coordinate(axis) => {
            if let Some(backend) = bindings.backend() {
                backend.coordinate(*axis, offset)
            } else {
                Ok(Value::Real(bindings.position()[axis.index()]))
            }
        },
        Terminal::Time => Ok(Value::Real(bindings.time())),
        Terminal::Custom(name) => {
            bindings.get(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UnboundTerminal { name: name.clone(),
                                                                offset })
        },
    }
}
