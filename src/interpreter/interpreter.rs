use crate::ast::ast::{Expr, Program};

use super::value::Scope;

/// Evaluates every top-level node of `program` in order against `scope`.
///
/// Results are discarded; the only effects are the host functions invoked
/// along the way.
pub fn evaluate(program: &Program, scope: &Scope) {
    for node in &program.body {
        node.evaluate(Some(scope), None);
    }

    tracing::debug!(nodes = program.body.len(), "evaluated program");
}
