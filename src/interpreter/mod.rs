//! Tree-walking interpreter module.
//!
//! This module evaluates a parsed program against a host-supplied scope.
//! It contains:
//!
//! - Runtime values, scopes and host functions
//! - Per-node evaluation for string literals, identifiers and calls
//! - The `evaluate` entry point for whole programs
//!
//! Evaluation never fails. Unbound names, property access on absent values
//! and calls on non-callable values all produce an absent value.

pub mod expr;
pub mod interpreter;
pub mod value;
