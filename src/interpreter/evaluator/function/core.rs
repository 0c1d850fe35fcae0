use std::{io::Write, rc::Rc};

use log::debug;

use crate::{
    ast::{CallNode, FuncDeclNode},
    error::Error,
    interpreter::{
        evaluator::core::{EvalResult, Program},
        scope::{Scope, ScopeRef},
        value::binding::{Binding, Function, Outcome, Unbound},
    },
};

impl<W: Write> Program<W> {
    /// Declares a function in `scope`.
    ///
    /// The declaration gets its own scope nested in `scope`. The parameters
    /// are bound there as placeholders and the body is run once against them,
    /// so structural errors surface at declaration time. While the body runs,
    /// `=!` prints nothing and calls to the function itself produce
    /// placeholders.
    ///
    /// # Errors
    /// - `RunTimeError` if the name is already bound in `scope`.
    /// - Propagates errors raised while validating the body.
    pub(crate) fn exec_func_decl(&mut self,
                                 decl: &Rc<FuncDeclNode>,
                                 scope: &ScopeRef)
                                 -> EvalResult<Outcome> {
        let name = &decl.id.name;
        validate_function_name(scope, decl)?;

        debug!("declaring function '{name}' in '{}'", scope.borrow().name());

        let depth = scope.borrow().call_depth();
        let closure = Scope::nested(format!("<Function: '{name}'>"), scope, depth);

        self.declaring.push(name.clone());
        let validation = self.exec_list(&decl.params, &closure)
                             .and_then(|_| self.exec_list(&decl.body, &closure));
        self.declaring.pop();
        validation?;

        closure.borrow_mut().take_pending_result();

        let function = Binding::Function(Function { declaration: Rc::clone(decl),
                                                    closure });
        scope.borrow_mut().set(name.clone(), function.clone());
        Ok(Outcome::from(function))
    }

    /// Calls a function.
    ///
    /// The arguments are evaluated in the caller's scope and bound to the
    /// parameters in a fresh scope nested in the function's declaration
    /// scope. The body runs there; whatever it returns is the result of the
    /// call and, with `=: name`, is bound to `name` in the caller's scope.
    ///
    /// A callee that cannot be resolved while its own body is being
    /// validated, or from an inline call, produces a placeholder. So does a
    /// call with a placeholder argument; its body is not run.
    ///
    /// # Parameters
    /// - `call`: The call node.
    /// - `scope`: The caller's scope.
    ///
    /// # Returns
    /// The returned binding, or nothing if the function did not return.
    ///
    /// # Errors
    /// - `RunTimeError` if the callee does not exist or is not a function, if
    ///   the number of arguments does not match, if the call depth limit is
    ///   reached, if a result is requested but nothing was returned, or if
    ///   the result would replace a function.
    /// - Propagates errors from the arguments and the body.
    pub(crate) fn exec_call(&mut self, call: &CallNode, scope: &ScopeRef) -> EvalResult<Outcome> {
        let Some(function) = self.resolve_callee(call, scope)? else {
            let placeholder = Binding::Unbound(Unbound { declared_by: call.id.clone() });
            return Self::bind_result(call, placeholder, scope);
        };

        let params = function.param_names();
        let given = call.args.items.len();
        if given != params.len() {
            let detail = if given < params.len() {
                format!("{} missing", params.len() - given)
            } else {
                format!("{} too many", given - params.len())
            };
            return Err(Error::runtime(format!("'{function}' takes {} arguments, {given} given \
                                               ({detail})",
                                              params.len()),
                                      call.token.position));
        }

        let depth = scope.borrow().call_depth();
        if depth >= self.max_call_depth() {
            return Err(Error::runtime(format!("maximum call depth of {} exceeded",
                                              self.max_call_depth()),
                                      call.token.position));
        }

        let args = call.args
                       .items
                       .iter()
                       .map(|arg| self.eval_binding(arg, scope))
                       .collect::<EvalResult<Vec<_>>>()?;

        if let Some(placeholder) = args.iter().find(|arg| matches!(arg, Binding::Unbound(_))) {
            let placeholder = placeholder.clone();
            return Self::bind_result(call, placeholder, scope);
        }

        let invocation = Scope::nested(format!("<Call: '{}' #{depth}>", call.id.name),
                                       &function.closure,
                                       depth + 1);
        {
            let mut invocation = invocation.borrow_mut();
            for (param, arg) in params.iter().zip(args) {
                invocation.set(*param, arg);
            }
        }

        debug!("calling '{function}' from '{}'", scope.borrow().name());
        let executed = self.exec_list(function.body(), &invocation);

        let returned = invocation.borrow_mut().take_pending_result();
        if !matches!(returned, Some(Binding::Function(_))) {
            Scope::release(&invocation);
        }
        executed?;

        match returned {
            Some(binding) => Self::bind_result(call, binding, scope),
            None if !self.declaring.is_empty() => {
                let placeholder = Binding::Unbound(Unbound { declared_by: call.id.clone() });
                Self::bind_result(call, placeholder, scope)
            },
            None => match &call.result {
                Some(target) => Err(Error::runtime(format!("'{}' didn't return a value to store \
                                                            in '{}'",
                                                           call.id.name, target.id.name),
                                                   call.token.position)),
                None => Ok(Outcome::Void),
            },
        }
    }

    /// Finds the function a call refers to.
    ///
    /// The caller's scope is searched first, then its outer scopes for
    /// functions only. `None` means the call produces a placeholder.
    fn resolve_callee(&self, call: &CallNode, scope: &ScopeRef) -> EvalResult<Option<Function>> {
        let name = &call.id.name;
        let scope = scope.borrow();

        match scope.get(name) {
            Some(Binding::Function(function)) => return Ok(Some(function)),
            Some(Binding::Unbound(_)) => return Ok(None),
            Some(Binding::Value(value)) => {
                return Err(Error::runtime(format!("'{name}' is bound to the value '{value}', \
                                                   not to a function"),
                                          call.id.position()));
            },
            None => {},
        }

        if let Some(function) = scope.outer_function(name) {
            return Ok(Some(function));
        }

        if call.inline || self.declaring.iter().any(|declaring| declaring == name) {
            return Ok(None);
        }

        Err(Error::runtime(format!("'{name}' doesn't exist within scope '{}'", scope.name()),
                           call.id.position()))
    }

    /// Binds the result of a call to the requested name, if any.
    fn bind_result(call: &CallNode, binding: Binding, scope: &ScopeRef) -> EvalResult<Outcome> {
        if let Some(target) = &call.result {
            let mut scope = scope.borrow_mut();
            if let Some(existing @ Binding::Function(_)) = scope.get(&target.id.name) {
                return Err(Error::runtime(format!("can't override {} '{}'",
                                                  existing.kind_name(),
                                                  target.id.name),
                                          target.id.position()));
            }
            scope.set(target.id.name.clone(), binding.clone());
        }

        Ok(Outcome::from(binding))
    }
}

/// Ensures that a function name is still free in the declaring scope.
///
/// # Errors
/// Returns a `RunTimeError` if the name is already bound.
pub fn validate_function_name(scope: &ScopeRef, decl: &FuncDeclNode) -> EvalResult<()> {
    let scope = scope.borrow();
    if scope.exists(&decl.id.name) {
        return Err(Error::runtime(format!("'{}' is already defined in scope '{}'",
                                          decl.id.name,
                                          scope.name()),
                                  decl.id.position()));
    }
    Ok(())
}
