use std::io::Write;

use crate::{
    ast::{Node, VarDeclNode},
    error::Error,
    interpreter::{
        evaluator::core::{EvalResult, Program},
        scope::ScopeRef,
        token::Token,
        value::{
            binding::{Binding, Outcome},
            core::Value,
        },
    },
};

impl<W: Write> Program<W> {
    /// Evaluates a conditional.
    ///
    /// When the branch is a bare `=: name` the truth value is bound to
    /// `name` and no branch is taken. Otherwise `then` runs if the condition
    /// holds and `otherwise`, if present, runs if it does not. Branches run in
    /// `scope` itself.
    ///
    /// # Parameters
    /// - `condition`: A comparison or a list of conditions that must all hold.
    /// - `then`: The branch taken when the condition holds.
    /// - `otherwise`: The optional branch taken when it does not.
    /// - `token`: The `=?` token.
    /// - `scope`: The scope both branches run in.
    ///
    /// # Returns
    /// The outcome of the branch taken, or the truth value when no branch ran.
    /// A condition that depends on a placeholder takes no branch and yields
    /// the placeholder.
    ///
    /// # Errors
    /// - `InvalidSyntaxError` if the condition does not produce a boolean.
    /// - Propagates errors from the condition and the branch taken.
    pub(crate) fn exec_conditional(&mut self,
                                   condition: &Node,
                                   then: &Node,
                                   otherwise: Option<&Node>,
                                   token: &Token,
                                   scope: &ScopeRef)
                                   -> EvalResult<Outcome> {
        let truth = self.eval_condition(condition, token, scope)?;

        if let Node::VarDecl(VarDeclNode { id, value: None, .. }) = then {
            scope.borrow_mut().set(id.name.clone(), truth.clone());
            return Ok(Outcome::from(truth));
        }

        let holds = match &truth {
            Binding::Value(value) => value.as_bool().unwrap_or_default(),
            _ => return Ok(Outcome::from(truth)),
        };

        if holds {
            self.exec(then, scope)
        } else if let Some(otherwise) = otherwise {
            self.exec(otherwise, scope)
        } else {
            Ok(Outcome::from(truth))
        }
    }

    /// Reduces a condition to a boolean value or a placeholder.
    ///
    /// A list of conditions is their conjunction and stops at the first one
    /// that does not hold.
    fn eval_condition(&mut self,
                      condition: &Node,
                      token: &Token,
                      scope: &ScopeRef)
                      -> EvalResult<Binding> {
        if let Node::List(list) = condition {
            for item in &list.items {
                let truth = self.eval_condition(item, token, scope)?;
                if matches!(&truth, Binding::Unbound(_))
                   || matches!(&truth, Binding::Value(v) if v.as_bool() == Some(false))
                {
                    return Ok(truth);
                }
            }
            return Ok(Binding::Value(Value::from(true)));
        }

        let position = condition.position().unwrap_or(token.position);
        match self.eval_binding(condition, scope)? {
            Binding::Value(value) if value.as_bool().is_some() => Ok(Binding::Value(value)),
            unbound @ Binding::Unbound(_) => Ok(unbound),
            other => Err(Error::invalid_syntax(format!("a condition must be a boolean, found \
                                                        '{other}'"),
                                               position)),
        }
    }
}
