use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    fmt, mem,
    rc::Rc,
};

use crate::interpreter::value::binding::{Binding, Function};

/// Shared handle to a [`Scope`].
///
/// Function values keep their declaration scope alive through this handle,
/// and nested scopes keep their outer scope alive the same way. A scope that
/// declares a function therefore forms a cycle with it until
/// [`Scope::release`] is called.
pub type ScopeRef = Rc<RefCell<Scope>>;

/// A named set of bindings linked to an outer scope.
///
/// The chain of outer scopes is only searched for functions. Plain values
/// are never inherited and have to be passed as arguments.
#[derive(Debug)]
pub struct Scope {
    name:           String,
    bindings:       HashMap<String, Binding>,
    outer:          Option<ScopeRef>,
    call_depth:     usize,
    pending_result: Option<Binding>,
}

impl Scope {
    /// Creates a scope without an outer scope, used as the root of a program.
    #[must_use]
    pub fn root(name: impl Into<String>) -> ScopeRef {
        Rc::new(RefCell::new(Self { name:           name.into(),
                                    bindings:       HashMap::new(),
                                    outer:          None,
                                    call_depth:     0,
                                    pending_result: None, }))
    }

    /// Creates a scope nested in `outer`.
    #[must_use]
    pub fn nested(name: impl Into<String>, outer: &ScopeRef, call_depth: usize) -> ScopeRef {
        Rc::new(RefCell::new(Self { name: name.into(),
                                    bindings: HashMap::new(),
                                    outer: Some(Rc::clone(outer)),
                                    call_depth,
                                    pending_result: None }))
    }

    /// The name of the scope, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many calls deep this scope was created.
    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// The outer scope, `None` for a root scope.
    #[must_use]
    pub fn outer(&self) -> Option<ScopeRef> {
        self.outer.clone()
    }

    /// Whether `name` is bound in this scope.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// A copy of the local binding of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).cloned()
    }

    /// Binds `name`, replacing any previous local binding.
    pub fn set(&mut self, name: impl Into<String>, binding: Binding) {
        self.bindings.insert(name.into(), binding);
    }

    /// Searches the outer scopes, nearest first, for a function named `name`.
    ///
    /// Bindings of other kinds are skipped. The local scope is not searched.
    #[must_use]
    pub fn outer_function(&self, name: &str) -> Option<Function> {
        let mut next = self.outer();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(Binding::Function(function)) = scope.bindings.get(name) {
                return Some(function.clone());
            }
            next = scope.outer();
        }
        None
    }

    /// Whether a return has been executed in this scope.
    #[must_use]
    pub const fn is_returning(&self) -> bool {
        self.pending_result.is_some()
    }

    /// Stores the value of a return.
    pub fn set_pending_result(&mut self, binding: Binding) {
        self.pending_result = Some(binding);
    }

    /// Removes and returns the value of the last return.
    pub fn take_pending_result(&mut self) -> Option<Binding> {
        self.pending_result.take()
    }

    /// The bindings rendered as text, ordered by name.
    ///
    /// # Example
    /// ```
    /// use moonlet::interpreter::{
    ///     scope::Scope,
    ///     value::{binding::Binding, core::Value},
    /// };
    ///
    /// let scope = Scope::root("<Program>");
    /// scope.borrow_mut().set("x", Binding::Value(Value::from(2.5)));
    /// assert_eq!(scope.borrow().snapshot()["x"], "2.5");
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.bindings
            .iter()
            .map(|(name, binding)| (name.clone(), binding.to_string()))
            .collect()
    }

    /// Empties a scope that will not be executed in again.
    ///
    /// Drops the bindings, the pending result and the outer link, then
    /// releases the declaration scopes of the functions declared directly in
    /// `scope`. Functions declared elsewhere, such as those received as
    /// arguments, are left intact unless `scope` is a root scope, which ends
    /// the program and releases every function it still holds.
    pub fn release(scope: &ScopeRef) {
        let (bindings, outer) = {
            let mut inner = scope.borrow_mut();
            inner.pending_result = None;
            (mem::take(&mut inner.bindings), inner.outer.take())
        };
        let is_root = outer.is_none();
        drop(outer);

        for binding in bindings.into_values() {
            let Binding::Function(function) = binding else {
                continue;
            };
            let declared_here = function.closure
                                        .borrow()
                                        .outer
                                        .as_ref()
                                        .is_some_and(|outer| Rc::ptr_eq(outer, scope));
            if is_root || declared_here {
                Self::release(&function.closure);
            }
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
