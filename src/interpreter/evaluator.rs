/// Core evaluation logic.
///
/// Contains the tree-walking evaluator: self-evaluating numbers, symbol
/// substitution, the `define` special form and builtin dispatch.
pub mod core;

/// Builtin function evaluation.
///
/// Holds the fixed operator table and the arithmetic behind it.
pub mod function;
