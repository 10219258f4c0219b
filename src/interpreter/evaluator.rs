/// Core evaluation logic and control signals.
///
/// Walks a parse tree, resolving names, performing assignments and
/// dispatching every node kind. `exit` and `help` leave the walk as
/// [`core::Signal`]s rather than values.
pub mod core;

/// Logical operator evaluation.
///
/// Implements the n-ary forms of AND, OR, XOR, NAND and NOR over the already
/// evaluated operands of one node.
pub mod logic;

/// Help text.
///
/// Builds the descriptions returned by `help` for operators, literals,
/// builtins and the current binding of a variable.
pub mod help;
