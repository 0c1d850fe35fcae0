use std::io::Write;

use crate::{
    ast::{Identifier, Node},
    error::Error,
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, scalar::eval_scalar_op},
            core::{EvalResult, Program},
        },
        scope::ScopeRef,
        token::Token,
        value::{
            binding::{Binding, Outcome},
            core::Value,
        },
    },
};

/// The operands of a binary operation.
enum Operands<'b> {
    /// Two plain values the operator applies to.
    Values(&'b Value, &'b Value),
    /// A placeholder that stands in for the result.
    Placeholder(Binding),
}

/// Unwraps two plain values, or picks the placeholder that stops the
/// operation.
///
/// A placeholder on either side wins over any other binding, the left one
/// first. Functions are not operands.
fn operands<'b>(op: &Token, left: &'b Binding, right: &'b Binding) -> EvalResult<Operands<'b>> {
    match (left, right) {
        (Binding::Unbound(_), _) => Ok(Operands::Placeholder(left.clone())),
        (_, Binding::Unbound(_)) => Ok(Operands::Placeholder(right.clone())),
        (Binding::Value(l), Binding::Value(r)) => Ok(Operands::Values(l, r)),
        _ => Err(Error::runtime(format!("can't apply '{}' to a {} and a {}",
                                        op.kind,
                                        left.kind_name(),
                                        right.kind_name()),
                                op.position)),
    }
}

impl<W: Write> Program<W> {
    /// Evaluates `lhs op rhs` for an arithmetic operator.
    ///
    /// A placeholder operand makes the whole expression a placeholder, which
    /// lets a function body be checked before any argument is known.
    ///
    /// # Errors
    /// Propagates errors from both operands and from [`eval_scalar_op`].
    pub(crate) fn exec_binary_op(&mut self,
                                 lhs: &Node,
                                 rhs: &Node,
                                 op: &Token,
                                 scope: &ScopeRef)
                                 -> EvalResult<Outcome> {
        let left = self.eval_binding(lhs, scope)?;
        let right = self.eval_binding(rhs, scope)?;

        match operands(op, &left, &right)? {
            Operands::Values(l, r) => Ok(Outcome::from(eval_scalar_op(op, l, r)?)),
            Operands::Placeholder(placeholder) => Ok(Outcome::from(placeholder)),
        }
    }

    /// Evaluates `lhs op rhs` for a comparison operator.
    ///
    /// # Errors
    /// Propagates errors from both operands and from [`eval_comparison`].
    pub(crate) fn exec_compare_op(&mut self,
                                  lhs: &Node,
                                  rhs: &Node,
                                  op: &Token,
                                  scope: &ScopeRef)
                                  -> EvalResult<Outcome> {
        let left = self.eval_binding(lhs, scope)?;
        let right = self.eval_binding(rhs, scope)?;

        match operands(op, &left, &right)? {
            Operands::Values(l, r) => Ok(Outcome::from(eval_comparison(op, l, r)?)),
            Operands::Placeholder(placeholder) => Ok(Outcome::from(placeholder)),
        }
    }

    /// Applies a compound assignment such as `=+ x 1` to an existing binding.
    ///
    /// The binding is only replaced once the new value has been computed, so
    /// a failing operation leaves it untouched. When either side is a
    /// placeholder the binding is left as it is.
    ///
    /// # Errors
    /// - `RunTimeError` if `id` is not bound in `scope`.
    /// - Propagates errors from the right-hand side and from
    ///   [`eval_scalar_op`].
    pub(crate) fn exec_assign_op(&mut self,
                                 id: &Identifier,
                                 value: &Node,
                                 op: &Token,
                                 scope: &ScopeRef)
                                 -> EvalResult<Outcome> {
        let current = {
            let scope = scope.borrow();
            scope.get(&id.name).ok_or_else(|| {
                Error::runtime(format!("'{}' doesn't exist within scope '{}'", id.name, scope.name()),
                               id.position())
            })?
        };
        let rhs = self.eval_binding(value, scope)?;

        let operator = op.kind.compound_operator().ok_or_else(|| {
            Error::not_implemented(format!("'{}' assignment is not implemented", op.kind),
                                   op.position)
        })?;
        let operator = Token::new(operator, op.position);

        let result = match operands(&operator, &current, &rhs)? {
            Operands::Values(l, r) => Binding::Value(eval_scalar_op(&operator, l, r)?),
            Operands::Placeholder(_) => return Ok(Outcome::from(current.clone())),
        };

        scope.borrow_mut().set(id.name.clone(), result.clone());
        Ok(Outcome::from(result))
    }
}
