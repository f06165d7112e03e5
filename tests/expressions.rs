use std::{cell::RefCell, rc::Rc};

use fieldexpr::{
    ast::{Axis, BinaryOperator, UnaryFunction},
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::core::{Bindings, EvalResult},
        value::{
            core::Value,
            field::{FieldHandle, FieldOps},
        },
    },
    parse,
    registry::TerminalRegistry,
};
use pretty_assertions::assert_eq;

fn eval_real(src: &str) -> f64 {
    let registry = TerminalRegistry::new();
    let tree = parse(src, &registry).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    match tree.evaluate(&Bindings::new()) {
        Ok(Value::Real(r)) => r,
        Ok(other) => panic!("'{src}' evaluated to the non-real value {other}"),
        Err(e) => panic!("'{src}' failed to evaluate: {e}"),
    }
}

fn eval_value(src: &str) -> Value {
    let registry = TerminalRegistry::new();
    let tree = parse(src, &registry).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    tree.evaluate(&Bindings::new())
        .unwrap_or_else(|e| panic!("'{src}' failed to evaluate: {e}"))
}

fn assert_parse_failure(src: &str) {
    let registry = TerminalRegistry::new();
    if parse(src, &registry).is_ok() {
        panic!("'{src}' parsed but was expected to fail");
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_real("1 + 2"), 3.0);
    assert_eq!(eval_real("7 * 9"), 63.0);
    assert_eq!(eval_real("8 - 5"), 3.0);
    assert_eq!(eval_real("10 / 2"), 5.0);
    assert_eq!(eval_real("2 ^ 10"), 1024.0);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval_real("2 + 3 * 4"), 14.0);
    assert_eq!(eval_real("8 - 3 - 2"), 3.0);
    assert_eq!(eval_real("100 / 10 / 5"), 2.0);
    assert_eq!(eval_real("2 ^ 3 ^ 2"), 64.0);
    assert_eq!(eval_real("2 * 3 ^ 2"), 18.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval_real("(2 + 3) * 4"), 20.0);
    assert_eq!(eval_real("(2 + 3) * (4 + 1)"), 25.0);
    assert_eq!(eval_real("2 ^ (3 ^ 2)"), 512.0);
    assert_eq!(eval_real("-(2 + 3)"), -5.0);
}

#[test]
fn display_shows_grouping() {
    let registry = TerminalRegistry::new();

    let cases = [("1 - 2 - 3", "((1-2)-3)"),
                 ("2 + 3 * 4", "(2+(3*4))"),
                 ("(2 + 3) * 4", "((2+3)*4)"),
                 ("2 ^ 3 ^ 2", "((2^3)^2)"),
                 ("sqrt(4) + 1", "(sqrt(4)+1)"),
                 ("-x * 2", "(-x*2)"),
                 ("1, 2 + 3, 4", "1, (2+3), 4")];

    for (src, rendered) in cases {
        let tree = parse(src, &registry).unwrap();
        assert_eq!(tree.to_string(), rendered, "display of '{src}'");
    }
}

#[test]
fn unary_functions() {
    assert_eq!(eval_real("sqrt(9)"), 3.0);
    assert_eq!(eval_real("abs(-5)"), 5.0);
    assert_eq!(eval_real("sin(0)"), 0.0);
    assert_eq!(eval_real("exp(0)"), 1.0);
    assert_eq!(eval_real("floor(3.7)"), 3.0);
    assert_eq!(eval_real("ceil(3.2)"), 4.0);
    assert_eq!(eval_real("round(3.7)"), 4.0);
    assert_eq!(eval_real("sign(-42)"), -1.0);
    assert_eq!(eval_real("sign(0)"), 0.0);
    assert_eq!(eval_real("log(1000)"), 3.0);
    assert_eq!(eval_real("ln(1)"), 0.0);
}

#[test]
fn functions_bind_tighter_than_operators() {
    assert_eq!(eval_real("sqrt(4) + 1"), 3.0);
    assert_eq!(eval_real("2 * abs(-3) + 1"), 7.0);
    assert_eq!(eval_real("-sqrt(16)"), -4.0);
}

#[test]
fn comma_lists_produce_sequences() {
    assert_eq!(eval_value("1, 2, 3"),
               vec![Value::Real(1.0), Value::Real(2.0), Value::Real(3.0)].into());
    assert_eq!(eval_value("1 + 1, 2 * 2"),
               vec![Value::Real(2.0), Value::Real(4.0)].into());

    let value = eval_value("10, 20");
    assert!(value.is_sequence());
    assert!(!value.is_real());
    assert_eq!(value.as_sequence(0).unwrap().len(), 2);
    assert!(eval_value("10 + 20").is_real());
}

#[test]
fn functions_map_elementwise_over_lists() {
    assert_eq!(eval_value("sqrt(4, 9)"),
               vec![Value::Real(2.0), Value::Real(3.0)].into());
    assert_eq!(eval_value("abs(-1, 2, -3)"),
               vec![Value::Real(1.0), Value::Real(2.0), Value::Real(3.0)].into());
}

#[test]
fn commas_inside_calls_do_not_split() {
    // One expression, not a two-element list.
    assert_eq!(eval_value("sqrt(4, 9) + abs(0 - 3)"),
               vec![Value::Real(5.0), Value::Real(6.0)].into());
}

#[test]
fn logic_does_not_short_circuit() {
    let registry = TerminalRegistry::new();

    // Both operands evaluate, so the division still fails.
    let tree = parse("false and 1 / 0 == 1", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn arithmetic_broadcasts_over_sequences() {
    assert_eq!(eval_value("2 * (1, 2, 3)"),
               vec![Value::Real(2.0), Value::Real(4.0), Value::Real(6.0)].into());
    assert_eq!(eval_value("(1, 2, 3) - 1"),
               vec![Value::Real(0.0), Value::Real(1.0), Value::Real(2.0)].into());
    assert_eq!(eval_value("(1, 2) + (10, 20)"),
               vec![Value::Real(11.0), Value::Real(22.0)].into());
}

#[test]
fn sequence_length_mismatch_is_an_error() {
    let registry = TerminalRegistry::new();
    let tree = parse("(1, 2) + (1, 2, 3)", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::LengthMismatch { left: 2, right: 3, .. })));
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(eval_value("2 < 3"), Value::Bool(true));
    assert_eq!(eval_value("3 <= 2"), Value::Bool(false));
    assert_eq!(eval_value("2 == 2"), Value::Bool(true));
    assert_eq!(eval_value("2 != 3"), Value::Bool(true));
    assert_eq!(eval_value("2 < 3 and 3 < 4"), Value::Bool(true));
    assert_eq!(eval_value("2 > 3 or 3 < 4"), Value::Bool(true));
    assert_eq!(eval_value("true and false"), Value::Bool(false));
}

#[test]
fn string_literals_pass_through() {
    assert_eq!(eval_value("'CG'"), Value::Str("CG".to_owned()));
    assert_eq!(eval_value("\"CG\" == 'CG'"), Value::Bool(true));
}

#[test]
fn custom_terminals_defer_until_supplied() {
    let mut registry = TerminalRegistry::new();
    registry.register("p").unwrap();

    let tree = parse("p * 2 + 1", &registry).unwrap();
    assert_eq!(tree.used_terminals(), vec!["p"]);

    let mut bindings = Bindings::new();
    assert!(!tree.is_ready(&bindings));
    assert!(matches!(tree.evaluate(&bindings),
                     Err(EvalError::UnboundTerminal { .. })));

    bindings.supply("p", 10.0.into());
    assert!(tree.is_ready(&bindings));
    assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(21.0));

    // Trees are immutable; a second evaluation sees the same result.
    assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(21.0));
}

#[test]
fn used_terminals_in_first_occurrence_order() {
    let mut registry = TerminalRegistry::new();
    registry.register("a").unwrap();
    registry.register("b").unwrap();
    registry.register("c").unwrap();

    let tree = parse("c + a * b + c - a", &registry).unwrap();
    assert_eq!(tree.used_terminals(), vec!["c", "a", "b"]);
}

#[test]
fn unregistered_names_fail_at_parse() {
    let registry = TerminalRegistry::new();
    assert!(matches!(parse("q + 1", &registry),
                     Err(ParseError::UnknownTerminal { ref name, .. }) if name == "q"));
}

#[test]
fn unknown_functions_fail_at_parse() {
    let registry = TerminalRegistry::new();
    assert!(matches!(parse("gamma(2)", &registry),
                     Err(ParseError::UnknownFunction { ref name, .. }) if name == "gamma"));
}

#[test]
fn registry_rejects_reserved_and_duplicate_names() {
    let mut registry = TerminalRegistry::new();
    assert!(registry.is_empty());

    registry.register("density").unwrap();
    assert_eq!(registry.len(), 1);

    assert!(matches!(registry.register("density"),
                     Err(ParseError::DuplicateTerminal { .. })));
    for reserved in ["x", "y", "z", "t", "and", "or", "true", "false", "sqrt"] {
        assert!(matches!(registry.register(reserved),
                         Err(ParseError::IdentifierReserved { .. })),
                "'{reserved}' should be rejected");
    }

    // Rejected registrations leave the set unchanged.
    assert_eq!(registry.len(), 1);
}

#[test]
fn coordinates_and_time_resolve_without_bindings() {
    let registry = TerminalRegistry::new();
    let tree = parse("x + y + z + t", &registry).unwrap();

    // The origin at time zero is the default.
    assert_eq!(tree.evaluate(&Bindings::new()).unwrap(), Value::Real(0.0));

    let mut bindings = Bindings::new();
    bindings.set_position([1.0, 2.0, 3.0]);
    bindings.set_time(10.0);
    assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(16.0));
}

#[test]
fn indexed_coordinates_alias_the_axes() {
    let registry = TerminalRegistry::new();
    let mut bindings = Bindings::new();
    bindings.set_position([1.0, 2.0, 3.0]);

    for (src, expected) in [("x[0]", 1.0), ("x[1]", 2.0), ("x[2]", 3.0)] {
        let tree = parse(src, &registry).unwrap();
        assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(expected));
    }

    assert!(matches!(parse("x[3]", &registry),
                     Err(ParseError::CoordinateIndexOutOfRange { index: 3, .. })));
    assert_parse_failure("x[1.5]");
}

#[test]
fn evaluation_errors_carry_offsets() {
    let registry = TerminalRegistry::new();

    let tree = parse("1 + 1 / 0", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::DivisionByZero { offset: 6 })));

    let tree = parse("sqrt(-1)", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::DomainError { .. })));

    let tree = parse("(-2) ^ 0.5", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::DomainError { .. })));
}

#[test]
fn division_by_zero_is_deferred_to_evaluation() {
    let mut registry = TerminalRegistry::new();
    registry.register("p").unwrap();

    // Parsing succeeds; only evaluating with p = 0 fails.
    let tree = parse("1 / p", &registry).unwrap();

    let mut bindings = Bindings::new();
    bindings.supply("p", 0.0.into());
    assert!(matches!(tree.evaluate(&bindings),
                     Err(EvalError::DivisionByZero { .. })));

    bindings.supply("p", 4.0.into());
    assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(0.25));
}

#[test]
fn type_errors_are_reported() {
    let registry = TerminalRegistry::new();

    let tree = parse("1 + true", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::ExpectedNumber { .. })));

    let tree = parse("1 and 2", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::ExpectedBoolean { .. })));

    let tree = parse("1 == 'CG'", &registry).unwrap();
    assert!(matches!(tree.evaluate(&Bindings::new()),
                     Err(EvalError::TypeError { .. })));
}

#[test]
fn malformed_expressions_fail_to_parse() {
    assert_parse_failure("");
    assert_parse_failure("1 +");
    assert_parse_failure("(1 + 2");
    assert_parse_failure("1 + 2)");
    assert_parse_failure("sqrt(");
    assert_parse_failure("1 2");
    assert_parse_failure("$");
    assert_parse_failure("1 + , 2");
}

#[test]
fn end_of_input_errors_point_past_the_source() {
    let registry = TerminalRegistry::new();

    assert!(matches!(parse("1 +", &registry),
                     Err(ParseError::UnexpectedEndOfInput { offset: 3 })));
    assert!(matches!(parse("sqrt(", &registry),
                     Err(ParseError::UnexpectedEndOfInput { offset: 5 })));
    assert!(matches!(parse("", &registry),
                     Err(ParseError::UnexpectedEndOfInput { offset: 0 })));
}

#[test]
fn scientific_notation_and_leading_dot() {
    assert_eq!(eval_real("1e3"), 1000.0);
    assert_eq!(eval_real("2.5e-1"), 0.25);
    assert_eq!(eval_real(".5 * 4"), 2.0);
}

/// A backend that records every delegated call. Binary operations answer
/// with a fresh field so chained operations keep delegating; coordinate and
/// unary calls answer with plain numbers.
struct RecordingBackend {
    calls: RefCell<Vec<String>>,
}

impl RecordingBackend {
    fn new() -> Self {
        Self { calls: RefCell::new(Vec::new()) }
    }
}

impl FieldOps for RecordingBackend {
    fn coordinate(&self, axis: Axis, _offset: usize) -> EvalResult<Value> {
        self.calls.borrow_mut().push(format!("coordinate {}", axis.index()));
        Ok(Value::Real(100.0))
    }

    fn binary(&self,
              op: BinaryOperator,
              _left: &Value,
              _right: &Value,
              _offset: usize)
              -> EvalResult<Value> {
        self.calls.borrow_mut().push(format!("binary {op}"));
        Ok(Value::Field(FieldHandle::new(7.0_f64)))
    }

    fn unary(&self, func: UnaryFunction, _operand: &Value, _offset: usize) -> EvalResult<Value> {
        self.calls.borrow_mut().push(format!("unary {func}"));
        Ok(Value::Real(8.0))
    }
}

#[test]
fn field_operands_are_delegated_to_the_backend() {
    let mut registry = TerminalRegistry::new();
    registry.register("temp").unwrap();

    let backend = Rc::new(RecordingBackend::new());
    let mut bindings = Bindings::new();
    bindings.attach_backend(backend.clone());
    bindings.supply("temp", FieldHandle::new("mesh field").into());

    let tree = parse("sqrt(temp * 2)", &registry).unwrap();
    assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(8.0));
    assert_eq!(*backend.calls.borrow(), vec!["binary *", "unary sqrt"]);

    // A field result from the backend stays a field, so every later
    // operation keeps delegating.
    backend.calls.borrow_mut().clear();
    let tree = parse("temp * 2 + 1", &registry).unwrap();
    assert!(tree.evaluate(&bindings).unwrap().is_field());
    assert_eq!(*backend.calls.borrow(), vec!["binary *", "binary +"]);
}

#[test]
fn backend_supplies_coordinates_when_attached() {
    let registry = TerminalRegistry::new();

    let backend = Rc::new(RecordingBackend::new());
    let mut bindings = Bindings::new();
    bindings.attach_backend(backend.clone());

    let tree = parse("y", &registry).unwrap();
    assert_eq!(tree.evaluate(&bindings).unwrap(), Value::Real(100.0));
    assert_eq!(*backend.calls.borrow(), vec!["coordinate 1"]);
}

#[test]
fn fields_without_a_backend_are_an_error() {
    let mut registry = TerminalRegistry::new();
    registry.register("temp").unwrap();

    let mut bindings = Bindings::new();
    bindings.supply("temp", FieldHandle::new(1.0_f64).into());

    let tree = parse("temp + 1", &registry).unwrap();
    assert!(matches!(tree.evaluate(&bindings),
                     Err(EvalError::FieldBackendMissing { .. })));
}
