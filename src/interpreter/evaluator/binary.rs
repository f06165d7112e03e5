use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Bindings, EvalResult},
        value::core::Value,
    },
};

/// Evaluates a binary operation on two already-evaluated operands.
///
/// Dispatch happens in a fixed order. If either operand is a field the whole
/// operation goes to the attached backend. Logical operators require boolean
/// operands. Comparison operators compare scalars. The arithmetic operators
/// broadcast elementwise over sequences and otherwise compute on plain
/// numbers.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`, `right`: The evaluated operands.
/// - `bindings`: The binding set, consulted for the backend.
/// - `offset`: Byte offset of the operator for error reporting.
///
/// # Errors
/// Returns an `EvalError` if the operand types do not fit the operator, a
/// division hits a zero divisor, sequence lengths disagree, or a field is
/// present with no backend attached.
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   bindings: &Bindings,
                   offset: usize)
                   -> EvalResult<Value> {
    if left.is_field() || right.is_field() {
        let Some(backend) = bindings.backend() else {
            return Err(EvalError::FieldBackendMissing { offset });
        };
        return backend.binary(op, left, right, offset);
    }

    match op {
        BinaryOperator::And => Ok((left.as_bool(offset)? && right.as_bool(offset)?).into()),
        BinaryOperator::Or => Ok((left.as_bool(offset)? || right.as_bool(offset)?).into()),
        BinaryOperator::Equal
        | BinaryOperator::NotEqual
        | BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => eval_comparison(op, left, right, offset),
        BinaryOperator::Add
        | BinaryOperator::Sub
        | BinaryOperator::Mul
        | BinaryOperator::Div
        | BinaryOperator::Pow => eval_arithmetic(op, left, right, bindings, offset),
    }
}

/// Evaluates a comparison between two scalar operands.
///
/// Equality accepts any pair of operands of the same scalar type; operands
/// of different types are a type error rather than unequal. The ordering
/// comparisons require numbers.
fn eval_comparison(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   offset: usize)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Equal | BinaryOperator::NotEqual => {
            let equal = match (left, right) {
                (Value::Real(a), Value::Real(b)) => a == b,
                (Value::Bool(a), Value::Bool(b)) => a == b,
                (Value::Str(a), Value::Str(b)) => a == b,
                _ => {
                    return Err(EvalError::TypeError { details: format!("cannot compare {left} \
                                                                        with {right}"),
                                                      offset });
                },
            };
            Ok((if op == BinaryOperator::Equal { equal } else { !equal }).into())
        },
        _ => {
            let a = left.as_real(offset)?;
            let b = right.as_real(offset)?;
            let result = match op {
                BinaryOperator::Less => a < b,
                BinaryOperator::Greater => a > b,
                BinaryOperator::LessEqual => a <= b,
                BinaryOperator::GreaterEqual => a >= b,
                _ => unreachable!("eval_comparison called with a non-comparison operator"),
            };
            Ok(result.into())
        },
    }
}

/// Evaluates an arithmetic operation, broadcasting over sequences.
///
/// Two sequences combine pairwise and must have equal lengths. A sequence
/// combined with a scalar applies the scalar to every element, preserving
/// operand order. The recursion bottoms out at plain numbers.
fn eval_arithmetic(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   bindings: &Bindings,
                   offset: usize)
                   -> EvalResult<Value> {
    match (left, right) {
        (Value::Sequence(a), Value::Sequence(b)) => {
            if a.len() != b.len() {
                return Err(EvalError::LengthMismatch { left: a.len(),
                                                       right: b.len(),
                                                       offset });
            }
            let items = a.iter()
                         .zip(b.iter())
                         .map(|(x, y)| eval_binary(op, x, y, bindings, offset))
                         .collect::<EvalResult<Vec<_>>>()?;
            Ok(items.into())
        },
        (Value::Sequence(a), _) => {
            let items = a.iter()
                         .map(|x| eval_binary(op, x, right, bindings, offset))
                         .collect::<EvalResult<Vec<_>>>()?;
            Ok(items.into())
        },
        (_, Value::Sequence(b)) => {
            let items = b.iter()
                         .map(|y| eval_binary(op, left, y, bindings, offset))
                         .collect::<EvalResult<Vec<_>>>()?;
            Ok(items.into())
        },
        _ => eval_scalar_op(op, left.as_real(offset)?, right.as_real(offset)?, offset),
    }
}

/// Computes an arithmetic operation on two plain numbers.
///
/// # Errors
/// Returns an `EvalError` if the divisor of `/` is zero, or if `^` is asked
/// for a negative base with a fractional exponent.
fn eval_scalar_op(op: BinaryOperator, a: f64, b: f64, offset: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero { offset });
            }
            a / b
        },
        BinaryOperator::Pow => {
            if a < 0.0 && b.fract() != 0.0 {
                return Err(EvalError::DomainError { details: format!("cannot raise the \
                                                                      negative base {a} to the \
                                                                      fractional exponent {b}"),
                                                    offset });
            }
            a.powf(b)
        },
        _ => unreachable!("eval_scalar_op called with a non-arithmetic operator"),
    };
    Ok(result.into())
}
