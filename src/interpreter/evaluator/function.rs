/// Builtin function implementations.
///
/// The arithmetic folds behind `+`, `-`, `*` and `/`.
pub mod builtin;

/// The builtin table, arity checks and argument conversion.
pub mod core;
