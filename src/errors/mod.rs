//! Error types and error handling for the interpreter.
//!
//! This module defines the structural errors that abort a run:
//!
//! - Error structures with position information
//! - Specific error variants for the lexing and parsing phases
//! - Error names and suggestions used when rendering errors
//!
//! Unbound names and non-callable call targets are not errors; the
//! interpreter treats them as absent values.

pub mod errors;
