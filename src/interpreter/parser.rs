/// Node storage used while the tree is under construction.
///
/// Nodes live in a flat vector and refer to their children by index, so the
/// builder can move an operand from one parent to another with a plain
/// `pop`/`push` on the owning vectors.
pub mod arena;

/// The single-pass tree builder.
///
/// Consumes the token sequence of one line and produces its parse tree,
/// checking the finished shape before handing it to the evaluator.
pub mod core;

pub use self::core::{MAX_NESTING, ParseResult, build_tree};
