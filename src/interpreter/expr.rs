use crate::ast::{
    ast::Expr,
    expressions::{CallExpr, IdentifierExpr},
};

use super::value::{Scope, Value};

/// Looks `name` up in `scope`. A missing scope binds nothing.
fn lookup(scope: Option<&Scope>, name: &str) -> Option<Value> {
    scope.and_then(|scope| scope.get(name)).cloned()
}

/// Evaluates an identifier, descending into its value when it has a
/// property. Values that are not objects expose no properties.
pub fn eval_identifier_expr(expr: &IdentifierExpr, scope: Option<&Scope>) -> Option<Value> {
    let value = lookup(scope, &expr.name);

    match &expr.property {
        Some(property) => {
            let target = value.as_ref().and_then(Value::as_scope);
            property.evaluate(target, None)
        }
        None => value,
    }
}

/// Evaluates one link of a call chain and then the rest of the chain.
///
/// Named links are looked up in `scope`; unnamed links call `invoked`, the
/// previous link's result. A link whose callee is missing or not a function
/// is skipped, but its arguments and the remaining links are still
/// evaluated.
///
/// Return values only flow into the next link; the call expression itself
/// always evaluates to nothing, so `f(g())` passes `f` an absent argument.
pub fn eval_call_expr(
    expr: &CallExpr,
    scope: Option<&Scope>,
    invoked: Option<&Value>,
) -> Option<Value> {
    let args = expr
        .params
        .iter()
        .map(|param| param.evaluate(scope, None))
        .collect::<Vec<Option<Value>>>();

    let callee = match &expr.name {
        Some(name) => lookup(scope, name),
        None => invoked.cloned(),
    };

    let result = callee.as_ref().and_then(Value::as_function).and_then(|function| {
        tracing::trace!(function = function.name(), args = args.len(), "invoking host function");
        function.call(&args)
    });

    if let Some(child) = &expr.child {
        eval_call_expr(child, scope, result.as_ref());
    }

    None
}
