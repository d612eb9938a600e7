use std::{any::Any, fmt::Debug};

use crate::interpreter::value::{Scope, Value};

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    StringLiteral,
    Identifier,
    CallExpression,
}

/// Expression Trait
///
/// Defines the behavior of all node types in the AST.
pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Evaluates the expression against `scope`.
    ///
    /// `invoked` is the value returned by the previous link of a call chain
    /// and is only consulted by unnamed call expressions.
    fn evaluate(&self, scope: Option<&Scope>, invoked: Option<&Value>) -> Option<Value>;
    /// Renders the expression back into source text.
    fn to_source(&self) -> String;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }

    /// Shorthand for downcasting to a concrete node.
    pub fn downcast_ref<T: Expr + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn evaluate(&self, scope: Option<&Scope>, invoked: Option<&Value>) -> Option<Value> {
        self.0.evaluate(scope, invoked)
    }
    fn to_source(&self) -> String {
        self.0.to_source()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// The parsed program: top-level nodes in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub body: Vec<ExprWrapper>,
}

impl Program {
    /// Canonical source text of the whole program, one space between
    /// top-level forms.
    pub fn to_source(&self) -> String {
        self.body
            .iter()
            .map(|node| node.to_source())
            .collect::<Vec<String>>()
            .join(" ")
    }
}
