use std::{collections::HashMap, fmt::{Debug, Display}, rc::Rc};

/// Signature of a host function. Arguments that evaluated to nothing are
/// passed as `None`.
pub type NativeFn = dyn Fn(&[Option<Value>]) -> Option<Value>;

/// Represents a runtime value in the interpreter.
///
/// Absence is never a variant; it is `None` wherever an `Option<Value>`
/// is expected.
#[derive(Debug, Clone)]
pub enum Value {
    /// A string, either from a literal or bound by the host.
    String(String),
    /// A nested scope. Property access descends into it.
    Object(Rc<Scope>),
    /// A host function. Its return value may itself be a function.
    Function(NativeFunction),
}

impl Value {
    pub fn function<F>(name: &str, func: F) -> Self
    where
        F: Fn(&[Option<Value>]) -> Option<Value> + 'static,
    {
        Value::Function(NativeFunction::new(name, func))
    }

    pub fn object(scope: Scope) -> Self {
        Value::Object(Rc::new(scope))
    }

    /// The scope to use when this value is the target of a property access.
    pub fn as_scope(&self) -> Option<&Scope> {
        match self {
            Value::Object(scope) => Some(scope.as_ref()),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&NativeFunction> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(&a.func, &b.func),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "{}", value),
            Value::Object(_) => write!(f, "[object]"),
            Value::Function(function) => write!(f, "[function {}]", function.name),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Scope> for Value {
    fn from(scope: Scope) -> Self {
        Value::object(scope)
    }
}

impl From<NativeFunction> for Value {
    fn from(function: NativeFunction) -> Self {
        Value::Function(function)
    }
}

/// A callable supplied by the host.
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    func: Rc<NativeFn>,
}

impl NativeFunction {
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(&[Option<Value>]) -> Option<Value> + 'static,
    {
        NativeFunction {
            name: name.to_string(),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Option<Value>]) -> Option<Value> {
        (self.func)(args)
    }
}

impl Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeFunction").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A mapping from names to values, built by the host.
///
/// The top-level scope is passed to `evaluate`; object values act as the
/// scope for the right-hand side of a property access.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: HashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Builder form of `insert`.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.bindings.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
