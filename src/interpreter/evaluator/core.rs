use std::io::{self, Stdout, Write};

use log::trace;

use crate::{
    ast::{Identifier, ListNode, Node},
    error::Error,
    interpreter::{
        position::Position,
        scope::ScopeRef,
        token::Token,
        value::{
            binding::{Binding, Outcome, Unbound},
            core::Value,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the first
/// [`Error`] encountered.
pub type EvalResult<T> = Result<T, Error>;

/// Default limit on nested function calls.
pub const MAX_CALL_DEPTH: usize = 200;

/// Executes syntax trees.
///
/// A `Program` owns the sink that `=!` writes to and the limit on nested
/// calls. All bindings live in scopes handed to [`Program::exec`], so one
/// program can run any number of trees.
///
/// ## Usage
///
/// ```
/// use moonlet::interpreter::{
///     evaluator::core::Program,
///     lexer::tokenize,
///     parser::core::parse,
///     scope::Scope,
/// };
///
/// let tokens = tokenize("=: x 4\n=* x 2\n=! x").unwrap();
/// let tree = parse(&tokens).unwrap();
///
/// let mut program = Program::with_output(Vec::new());
/// let root = Scope::root("<Program>");
/// program.exec_list(&tree, &root).unwrap();
///
/// assert_eq!(root.borrow().snapshot()["x"], "8");
/// assert_eq!(program.into_output(), b"8\n");
/// ```
pub struct Program<W: Write = Stdout> {
    output:               W,
    max_call_depth:       usize,
    /// Names of the functions whose bodies are being validated, innermost
    /// last.
    pub(crate) declaring: Vec<String>,
}

impl Program<Stdout> {
    /// Creates a program that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Program<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Program<W> {
    /// Creates a program that prints to `output`.
    #[must_use]
    pub const fn with_output(output: W) -> Self {
        Self { output,
               max_call_depth: MAX_CALL_DEPTH,
               declaring: Vec::new() }
    }

    /// Replaces the limit on nested function calls.
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// The limit on nested function calls.
    #[must_use]
    pub const fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Gives back the print sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes a node in `scope`.
    ///
    /// This is the single entry point of the evaluator; every node kind is
    /// dispatched to its own handler.
    ///
    /// # Parameters
    /// - `node`: The node to execute.
    /// - `scope`: The scope the node reads from and binds into.
    ///
    /// # Returns
    /// The binding the node produced, the outcomes of a list, or nothing.
    ///
    /// # Errors
    /// Returns the first error raised while executing the node or any of its
    /// children.
    pub fn exec(&mut self, node: &Node, scope: &ScopeRef) -> EvalResult<Outcome> {
        trace!("exec {} in '{}'", node.kind_name(), scope.borrow().name());

        match node {
            Node::Number(token) | Node::String(token) | Node::Boolean(token) => {
                Self::exec_literal(node, token)
            },
            Node::Identifier(id) => Self::exec_identifier(id, scope),
            Node::List(list) => self.exec_list(list, scope),
            Node::Param(id) => Self::exec_param(id, scope),
            Node::BinaryOp { lhs, rhs, op } => self.exec_binary_op(lhs, rhs, op, scope),
            Node::CompareOp { lhs, rhs, op } => self.exec_compare_op(lhs, rhs, op, scope),
            Node::AssignOp { id, value, op } => self.exec_assign_op(id, value, op, scope),
            Node::VarDecl(decl) => self.exec_var_decl(decl, scope),
            Node::Return { value, token } => self.exec_return(value, token, scope),
            Node::FuncDecl(decl) => self.exec_func_decl(decl, scope),
            Node::Call(call) => self.exec_call(call, scope),
            Node::Conditional { condition,
                                then,
                                otherwise,
                                token, } => {
                self.exec_conditional(condition, then, otherwise.as_deref(), token, scope)
            },
            Node::Print { value, token } => self.exec_print(value, token, scope),
        }
    }

    /// Executes the items of a list in order, in the same scope.
    ///
    /// Stops after the first item that leaves a pending result in `scope`,
    /// so a return inside a nested block also ends every enclosing block of
    /// the same call.
    ///
    /// # Errors
    /// Returns the error of the first failing item.
    pub fn exec_list(&mut self, list: &ListNode, scope: &ScopeRef) -> EvalResult<Outcome> {
        let mut outcomes = Vec::with_capacity(list.items.len());

        for item in &list.items {
            outcomes.push(self.exec(item, scope)?);
            if scope.borrow().is_returning() {
                break;
            }
        }

        Ok(Outcome::Sequence(outcomes))
    }

    /// Executes a node that has to produce exactly one binding.
    pub(crate) fn eval_binding(&mut self, node: &Node, scope: &ScopeRef) -> EvalResult<Binding> {
        let position = node.position().unwrap_or_default();
        self.exec(node, scope)?.into_binding(position)
    }

    fn exec_literal(node: &Node, token: &Token) -> EvalResult<Outcome> {
        let value = Value::from_literal(node).ok_or_else(|| {
            Error::not_implemented(format!("'{}' literal is not implemented", token.kind),
                                   token.position)
        })?;
        Ok(Outcome::from(value))
    }

    fn exec_identifier(id: &Identifier, scope: &ScopeRef) -> EvalResult<Outcome> {
        let scope = scope.borrow();
        let binding = scope.get(&id.name).ok_or_else(|| {
            Error::runtime(format!("'{}' doesn't exist within scope '{}'", id.name, scope.name()),
                           id.position())
        })?;
        Ok(Outcome::from(binding))
    }

    /// Binds a formal parameter to a placeholder.
    fn exec_param(id: &Identifier, scope: &ScopeRef) -> EvalResult<Outcome> {
        let mut scope = scope.borrow_mut();
        if scope.exists(&id.name) {
            return Err(Error::runtime(format!("'{}' is already defined in scope '{}'",
                                              id.name,
                                              scope.name()),
                                      id.position()));
        }

        let placeholder = Binding::Unbound(Unbound { declared_by: id.clone() });
        scope.set(id.name.clone(), placeholder.clone());
        Ok(Outcome::from(placeholder))
    }

    /// Writes the value followed by a newline to the print sink.
    ///
    /// Nothing is written while a function body is being validated.
    fn exec_print(&mut self, value: &Node, token: &Token, scope: &ScopeRef) -> EvalResult<Outcome> {
        let binding = self.eval_binding(value, scope)?;

        if self.declaring.is_empty() {
            writeln!(self.output, "{binding}").map_err(|e| print_error(&e, token.position))?;
        }

        Ok(Outcome::from(binding))
    }
}

fn print_error(error: &io::Error, position: Position) -> Error {
    Error::runtime(format!("can't print: {error}"), position)
}
