use std::cmp::Ordering;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::EvalResult,
        token::{Token, TokenKind},
        value::core::{Payload, Value},
    },
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Both operands must originate from the same kind of literal. Integers are
/// compared exactly, mixed numbers as floats, strings lexicographically and
/// booleans with `false < true`.
///
/// # Parameters
/// - `op`: The comparison operator token.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean.
///
/// # Errors
/// - `RunTimeError` if the operands originate from different kinds of
///   literals.
/// - `NotImplementedError` if `op` is not a comparison operator.
///
/// # Example
/// ```
/// use moonlet::interpreter::{
///     evaluator::binary::comparison::eval_comparison,
///     position::Position,
///     token::{Token, TokenKind},
///     value::core::Value,
/// };
///
/// let less = Token::new(TokenKind::Less, Position::default());
/// let result = eval_comparison(&less, &Value::from(3), &Value::from(5.5)).unwrap();
/// assert_eq!(result, Value::from(true));
/// ```
pub fn eval_comparison(op: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    if left.origin != right.origin {
        return Err(Error::runtime(format!("can't compare a {} with a {}",
                                          left.origin, right.origin),
                                  op.position));
    }

    let ordering = match (&left.payload, &right.payload) {
        (Payload::Int(a), Payload::Int(b)) => Some(a.cmp(b)),
        (Payload::Str(a), Payload::Str(b)) => Some(a.cmp(b)),
        (Payload::Bool(a), Payload::Bool(b)) => Some(a.cmp(b)),
        _ => left.to_f64(op.position)?.partial_cmp(&right.to_f64(op.position)?),
    };

    let result = match &op.kind {
        TokenKind::Equal => ordering == Some(Ordering::Equal),
        TokenKind::NotEqual => ordering != Some(Ordering::Equal),
        TokenKind::Greater => ordering == Some(Ordering::Greater),
        TokenKind::GreaterOrEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        TokenKind::Less => ordering == Some(Ordering::Less),
        TokenKind::LessOrEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        other => {
            return Err(Error::not_implemented(format!("'{other}' comparison is not implemented"),
                                              op.position));
        },
    };

    Ok(Value::from(result))
}
