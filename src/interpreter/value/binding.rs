use std::{fmt, rc::Rc};

use crate::{
    ast::{FuncDeclNode, Identifier, ListNode},
    error::Error,
    interpreter::{position::Position, scope::ScopeRef, value::core::Value},
};

/// Placeholder for a value that is not known yet.
///
/// Parameters are bound to placeholders while a function body is validated
/// at declaration time. Arithmetic and comparison involving a placeholder
/// yield the placeholder instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Unbound {
    /// The parameter or call that introduced the placeholder.
    pub declared_by: Identifier,
}

/// A declared function together with the scope it was declared in.
#[derive(Clone)]
pub struct Function {
    /// The declaration node, shared with the syntax tree.
    pub declaration: Rc<FuncDeclNode>,
    /// The scope created for the declaration. Its outer scope is the scope the
    /// function was declared in.
    pub closure:     ScopeRef,
}

impl Function {
    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.declaration.id.name
    }

    /// The statements of the body.
    #[must_use]
    pub fn body(&self) -> &ListNode {
        &self.declaration.body
    }

    /// Names of the formal parameters in declaration order.
    #[must_use]
    pub fn param_names(&self) -> Vec<&str> {
        self.declaration.param_names()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.declaration, &other.declaration) && Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name())
         .field("params", &self.param_names())
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.param_names().join(", "))
    }
}

/// Anything a name can be bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A plain value.
    Value(Value),
    /// A declared function.
    Function(Function),
    /// A placeholder for a value not known yet.
    Unbound(Unbound),
}

impl From<Value> for Binding {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl Binding {
    /// A short name of the binding kind, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Function(_) => "function",
            Self::Unbound(_) => "unbound",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => v.fmt(f),
            Self::Function(func) => func.fmt(f),
            Self::Unbound(_) => f.write_str("unbound"),
        }
    }
}

/// The result of executing a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A single binding.
    Binding(Binding),
    /// The outcomes of the items of a list, in order.
    Sequence(Vec<Self>),
    /// Nothing, for example a conditional whose branch was not taken.
    Void,
}

impl From<Binding> for Outcome {
    fn from(b: Binding) -> Self {
        Self::Binding(b)
    }
}

impl From<Value> for Outcome {
    fn from(v: Value) -> Self {
        Self::Binding(Binding::Value(v))
    }
}

impl Outcome {
    /// Unwraps a single binding.
    ///
    /// # Errors
    /// Returns a `RunTimeError` if the outcome is a sequence or empty, which
    /// happens when a list is used where one value is expected.
    pub fn into_binding(self, position: Position) -> Result<Binding, Error> {
        match self {
            Self::Binding(binding) => Ok(binding),
            Self::Sequence(_) => Err(Error::runtime("expected a single value, found a list", position)),
            Self::Void => Err(Error::runtime("expected a value, found nothing", position)),
        }
    }
}
