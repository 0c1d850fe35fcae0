use std::io::Write;

use crate::{
    ast::{Node, VarDeclNode},
    error::Error,
    interpreter::{
        evaluator::core::{EvalResult, Program},
        scope::ScopeRef,
        token::Token,
        value::binding::Outcome,
    },
};

impl<W: Write> Program<W> {
    /// Evaluates `=: name value` and binds the result in `scope`, replacing
    /// any previous local binding of the same name.
    ///
    /// # Errors
    /// - `RunTimeError` if the declaration has no value. Only call and
    ///   conditional capture targets are written without one, and those are
    ///   bound by their owner.
    /// - Propagates errors from the value.
    pub(crate) fn exec_var_decl(&mut self,
                                decl: &VarDeclNode,
                                scope: &ScopeRef)
                                -> EvalResult<Outcome> {
        let value = decl.value.as_deref().ok_or_else(|| {
            Error::runtime(format!("'{}' is declared without a value", decl.id.name),
                           decl.token.position)
        })?;

        let binding = self.eval_binding(value, scope)?;
        scope.borrow_mut().set(decl.id.name.clone(), binding.clone());
        Ok(Outcome::from(binding))
    }

    /// Evaluates `=> value` and leaves the result pending in `scope`.
    ///
    /// The enclosing lists notice the pending result and stop.
    pub(crate) fn exec_return(&mut self,
                              value: &Node,
                              token: &Token,
                              scope: &ScopeRef)
                              -> EvalResult<Outcome> {
        let binding = self.exec(value, scope)?.into_binding(token.position)?;
        scope.borrow_mut().set_pending_result(binding.clone());
        Ok(Outcome::from(binding))
    }
}
