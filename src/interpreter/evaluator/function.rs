use crate::{
    ast::UnaryFunction,
    error::EvalError,
    interpreter::{
        evaluator::core::{Bindings, EvalResult},
        value::core::Value,
    },
};

/// Applies a unary function to an already-evaluated operand.
///
/// A field operand goes to the attached backend. A sequence maps the
/// function over its elements, so `sqrt(4, 9)` yields `[2, 3]`. Everything
/// else must be a number, except negation which only accepts numbers and
/// reports them precisely.
///
/// # Parameters
/// - `func`: The function to apply.
/// - `value`: The evaluated operand.
/// - `bindings`: The binding set, consulted for the backend.
/// - `offset`: Byte offset of the function for error reporting.
///
/// # Errors
/// Returns an `EvalError` if the operand is not numeric, the argument falls
/// outside the function's domain, or a field is present with no backend
/// attached.
pub fn apply_function(func: UnaryFunction,
                      value: &Value,
                      bindings: &Bindings,
                      offset: usize)
                      -> EvalResult<Value> {
    if value.is_field() {
        let Some(backend) = bindings.backend() else {
            return Err(EvalError::FieldBackendMissing { offset });
        };
        return backend.unary(func, value, offset);
    }

    if let Value::Sequence(items) = value {
        let mapped = items.iter()
                          .map(|item| apply_function(func, item, bindings, offset))
                          .collect::<EvalResult<Vec<_>>>()?;
        return Ok(mapped.into());
    }

    let x = value.as_real(offset)?;
    check_domain(func, x, offset)?;

    let result = match func {
        UnaryFunction::Neg => -x,
        UnaryFunction::Sin => x.sin(),
        UnaryFunction::Cos => x.cos(),
        UnaryFunction::Tan => x.tan(),
        UnaryFunction::Asin => x.asin(),
        UnaryFunction::Acos => x.acos(),
        UnaryFunction::Atan => x.atan(),
        UnaryFunction::Sinh => x.sinh(),
        UnaryFunction::Cosh => x.cosh(),
        UnaryFunction::Tanh => x.tanh(),
        UnaryFunction::Exp => x.exp(),
        UnaryFunction::Ln => x.ln(),
        UnaryFunction::Log => x.log10(),
        UnaryFunction::Sqrt => x.sqrt(),
        UnaryFunction::Abs => x.abs(),
        UnaryFunction::Sign => {
            if x == 0.0 {
                0.0
            } else {
                x.signum()
            }
        },
        UnaryFunction::Floor => x.floor(),
        UnaryFunction::Ceil => x.ceil(),
        UnaryFunction::Round => x.round(),
    };
    Ok(result.into())
}

/// Rejects arguments outside a function's real domain.
///
/// `sqrt` requires a non-negative argument, the logarithms a positive one,
/// and the inverse sine and cosine an argument in `[-1, 1]`. Every other
/// function is total over the reals.
fn check_domain(func: UnaryFunction, x: f64, offset: usize) -> EvalResult<()> {
    let error = match func {
        UnaryFunction::Sqrt if x < 0.0 => {
            format!("sqrt of the negative number {x}")
        },
        UnaryFunction::Ln | UnaryFunction::Log if x <= 0.0 => {
            format!("logarithm of the non-positive number {x}")
        },
        UnaryFunction::Asin | UnaryFunction::Acos if !(-1.0..=1.0).contains(&x) => {
            format!("{func} of {x}, which is outside [-1, 1]")
        },
        _ => return Ok(()),
    };
    Err(EvalError::DomainError { details: error,
                                 offset })
}
