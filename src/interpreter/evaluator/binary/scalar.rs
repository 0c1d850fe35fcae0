use crate::{
    error::Error,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Token, TokenKind},
        value::core::{Payload, Value},
    },
};

/// Evaluates an arithmetic operation between two plain values.
///
/// Both operands must originate from the same kind of literal. Numbers
/// support all four operators: integer operands stay integers for `+`, `-`
/// and `*`, while `/` and any float operand produce a float. Strings only
/// support `+`, which concatenates. Booleans support none.
///
/// # Parameters
/// - `op`: The operator token, one of `+`, `-`, `*`, `/`.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Errors
/// - `RunTimeError` if the operands originate from different kinds of
///   literals, or if integer arithmetic overflows.
/// - `ZeroDivisionError` if `op` is `/` and `right` is zero. Nothing is
///   computed in that case.
/// - `InvalidSyntaxError` if the operator does not apply to the operands.
/// - `NotImplementedError` if `op` is not an arithmetic operator.
///
/// # Example
/// ```
/// use moonlet::interpreter::{
///     evaluator::binary::scalar::eval_scalar_op,
///     position::Position,
///     token::{Token, TokenKind},
///     value::core::Value,
/// };
///
/// let div = Token::new(TokenKind::Div, Position::default());
/// let result = eval_scalar_op(&div, &Value::from(7), &Value::from(2)).unwrap();
/// assert_eq!(result, Value::from(3.5));
/// ```
pub fn eval_scalar_op(op: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    if left.origin != right.origin {
        return Err(Error::runtime(format!("can't apply '{}' to a {} and a {}",
                                          op.kind, left.origin, right.origin),
                                  op.position));
    }

    match (&left.payload, &right.payload) {
        (Payload::Str(a), Payload::Str(b)) if op.kind == TokenKind::Add => {
            Ok(Value::from(format!("{a}{b}")))
        },
        (Payload::Int(_) | Payload::Float(_), Payload::Int(_) | Payload::Float(_)) => {
            eval_numeric(op, left, right)
        },
        _ => Err(Error::invalid_syntax(format!("'{}' can't be applied to {} values",
                                               op.kind, left.origin),
                                       op.position)),
    }
}

fn eval_numeric(op: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    use TokenKind::{Add, Div, Mul, Sub};

    if op.kind == Div && right.is_zero() {
        return Err(Error::zero_division(format!("can't divide {left} by zero"), op.position));
    }

    if let (Payload::Int(a), Payload::Int(b)) = (&left.payload, &right.payload) {
        let result = match op.kind {
            Add => Some(a.checked_add(*b)),
            Sub => Some(a.checked_sub(*b)),
            Mul => Some(a.checked_mul(*b)),
            _ => None,
        };
        if let Some(result) = result {
            return result.map(Value::from).ok_or_else(|| {
                Error::runtime(format!("integer overflow in {a} {} {b}", op.kind), op.position)
            });
        }
    }

    let a = left.to_f64(op.position)?;
    let b = right.to_f64(op.position)?;

    let result = match &op.kind {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
        other => {
            return Err(Error::not_implemented(format!("'{other}' operator is not implemented"),
                                              op.position));
        },
    };

    Ok(Value::from(result))
}
