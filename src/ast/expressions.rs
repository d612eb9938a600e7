use std::any::Any;

use crate::interpreter::{
    expr::{eval_call_expr, eval_identifier_expr},
    value::{Scope, Value},
};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// String Literal Expression
/// Represents a double-quoted string in the AST. The value has no escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteralExpr {
    pub value: String,
}

impl Expr for StringLiteralExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::StringLiteral
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn evaluate(&self, _scope: Option<&Scope>, _invoked: Option<&Value>) -> Option<Value> {
        Some(Value::String(self.value.clone()))
    }
    fn to_source(&self) -> String {
        format!("\"{}\"", self.value)
    }
}

/// Identifier Expression
/// Represents a name lookup, optionally followed by a property access.
///
/// `a.b`, `a[b` and `a]b` all produce the same node: the property is
/// whatever node follows the delimiter, looked up inside the value of `a`.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
    pub property: Option<ExprWrapper>,
}

impl Expr for IdentifierExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn evaluate(&self, scope: Option<&Scope>, _invoked: Option<&Value>) -> Option<Value> {
        eval_identifier_expr(self, scope)
    }
    fn to_source(&self) -> String {
        match &self.property {
            Some(property) => format!("{}.{}", self.name, property.to_source()),
            None => self.name.clone(),
        }
    }
}

// COMPLEX

/// Call Expression
/// Represents a call, e.g. `f(a "b")`, together with any chained calls.
///
/// `f(a)(b)` is a call named `f` whose `child` is an unnamed call with
/// params `[b]`. Only the outermost link has a name.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub name: Option<String>,
    pub params: Vec<ExprWrapper>,
    pub child: Option<Box<CallExpr>>,
}

impl CallExpr {
    /// Number of links in the chain, including this one.
    pub fn chain_depth(&self) -> usize {
        1 + self.child.as_ref().map_or(0, |child| child.chain_depth())
    }
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::CallExpression
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn evaluate(&self, scope: Option<&Scope>, invoked: Option<&Value>) -> Option<Value> {
        eval_call_expr(self, scope, invoked)
    }
    fn to_source(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|param| param.to_source())
            .collect::<Vec<String>>()
            .join(" ");

        let mut source = format!("{}({})", self.name.as_deref().unwrap_or_default(), params);
        if let Some(child) = &self.child {
            source.push_str(&child.to_source());
        }

        source
    }
}
