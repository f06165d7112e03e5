use std::{any::Any, fmt, rc::Rc};

use crate::{
    ast::{Axis, BinaryOperator, UnaryFunction},
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// An opaque handle to a field object owned by a numerical backend.
///
/// The engine never inspects the wrapped object; it only carries it through
/// evaluation and hands it back to the backend when a field participates in
/// an operation. Backends recover their concrete type with
/// [`FieldHandle::downcast_ref`].
///
/// Handles compare by identity (two handles are equal only if they wrap the
/// same allocation), which is deterministic regardless of the wrapped type.
///
/// ## Example
/// ```
/// use fieldexpr::interpreter::value::field::FieldHandle;
///
/// let handle = FieldHandle::new(vec![1.0_f64, 2.0]);
/// let other = handle.clone();
///
/// assert_eq!(handle, other);
/// assert_eq!(handle.downcast_ref::<Vec<f64>>().unwrap()[1], 2.0);
/// assert!(handle.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct FieldHandle(Rc<dyn Any>);

impl FieldHandle {
    /// Wraps a backend object in an opaque handle.
    #[must_use]
    pub fn new<T: 'static>(object: T) -> Self {
        Self(Rc::new(object))
    }

    /// Attempts to recover the concrete backend type.
    ///
    /// # Returns
    /// - `Some(&T)`: If the handle wraps a `T`.
    /// - `None`: If the wrapped object has a different type.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for FieldHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<field>")
    }
}

/// The seam between the expression engine and a numerical backend.
///
/// When an operand of a binary operation or unary function is a
/// [`Value::Field`], the evaluator delegates the whole operation to the
/// attached backend through this trait instead of computing it itself. The
/// backend is also consulted for the spatial coordinate symbols, letting it
/// substitute mesh coordinate fields for plain numbers.
///
/// All methods receive the byte offset of the originating node so backend
/// errors carry a source position.
pub trait FieldOps {
    /// Produces the value of a spatial coordinate symbol.
    ///
    /// # Errors
    /// Returns an `EvalError` if the backend cannot provide the coordinate.
    fn coordinate(&self, axis: Axis, offset: usize) -> EvalResult<Value>;

    /// Applies a binary operation where at least one operand is a field.
    ///
    /// # Errors
    /// Returns an `EvalError` if the backend rejects the operand combination.
    fn binary(&self,
              op: BinaryOperator,
              left: &Value,
              right: &Value,
              offset: usize)
              -> EvalResult<Value>;

    /// Applies a unary function to a field operand.
    ///
    /// # Errors
    /// Returns an `EvalError` if the backend rejects the operand.
    fn unary(&self, func: UnaryFunction, operand: &Value, offset: usize) -> EvalResult<Value>;
}
