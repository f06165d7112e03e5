use std::rc::Rc;

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::field::FieldHandle},
};

/// Represents a runtime value produced by evaluation.
///
/// This enum models all the possible results of evaluating a configuration
/// expression: plain numbers and booleans, quoted strings, ordered sequences
/// from comma lists, and opaque field objects produced by a numerical
/// backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// `and`/`or`, or bound directly to a custom terminal.
    Bool(bool),
    /// A quoted string value, passed through evaluation unchanged.
    Str(String),
    /// An ordered sequence of `Value` elements, produced by comma lists.
    Sequence(Rc<Vec<Self>>),
    /// An opaque field object owned by the numerical backend.
    Field(FieldHandle),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Sequence(Rc::new(v))
    }
}

impl From<FieldHandle> for Value {
    fn from(v: FieldHandle) -> Self {
        Self::Field(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `offset`: Byte offset into the source expression for error
    ///   reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real.
    /// - `Err(EvalError::ExpectedNumber)`: If not numeric.
    ///
    /// # Example
    /// ```
    /// use fieldexpr::interpreter::value::core::Value;
    ///
    /// let x = Value::Real(10.0);
    /// assert_eq!(x.as_real(0).unwrap(), 10.0);
    ///
    /// assert!(Value::Bool(true).as_real(0).is_err());
    /// ```
    pub const fn as_real(&self, offset: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            _ => Err(EvalError::ExpectedNumber { offset }),
        }
    }
    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the operands of logical `and`/`or`.
    ///
    /// # Parameters
    /// - `offset`: Byte offset into the source expression for error
    ///   reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(EvalError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self, offset: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvalError::ExpectedBoolean { offset }),
        }
    }

    /// Converts the value to a slice of values, or returns an error if not a
    /// sequence.
    ///
    /// # Parameters
    /// - `offset`: Byte offset into the source expression for error
    ///   reporting.
    ///
    /// # Returns
    /// - `Ok(&Vec<Value>)`: If the value is a sequence.
    /// - `Err(EvalError::TypeError)`: If not a sequence.
    ///
    /// # Example
    /// ```
    /// use fieldexpr::interpreter::value::core::Value;
    ///
    /// let seq: Value = vec![Value::Real(2.0), Value::Real(3.0)].into();
    /// assert_eq!(seq.as_sequence(0).unwrap().len(), 2);
    ///
    /// assert!(Value::Real(2.0).as_sequence(0).is_err());
    /// ```
    pub fn as_sequence(&self, offset: usize) -> EvalResult<&Vec<Self>> {
        match self {
            Self::Sequence(v) => Ok(v),
            _ => Err(EvalError::TypeError { details: format!("expected a sequence, got {self}"),
                                            offset }),
        }
    }

    /// Returns `true` if the value is [`Real`].
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` if the value is [`Sequence`].
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(..))
    }

    /// Returns `true` if the value is [`Field`].
    #[must_use]
    pub const fn is_field(&self) -> bool {
        matches!(self, Self::Field(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Sequence(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Field(handle) => write!(f, "{handle:?}"),
        }
    }
}
