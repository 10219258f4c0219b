/// The environment module holds the names visible to evaluation.
///
/// It maps lower-cased names to booleans, seeds the permanent literal
/// bindings and rejects assignments to reserved names.
///
/// # Responsibilities
/// - Stores and looks up variables case-insensitively.
/// - Knows which names are keywords, literals or builtins.
pub mod environment;
/// The evaluator module reduces parse trees to booleans.
///
/// The evaluator walks the tree, resolves names, performs assignments and
/// applies the logical operators. `exit` and `help` interrupt the walk as
/// signals instead of values.
///
/// # Responsibilities
/// - Evaluates every node kind produced by the tree builder.
/// - Reports undefined and reserved names.
/// - Produces help text.
pub mod evaluator;
/// The lexer module tokenizes one line of source text.
///
/// The lexer reads the raw text and produces a sequence of classified tokens:
/// operators in word or symbol form, names, parentheses and the help keyword.
/// Whitespace and comments are discarded. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens, case-insensitively.
/// - Reports the first character that matches no token pattern.
pub mod lexer;
/// The parser module builds the parse tree from tokens.
///
/// The parser makes a single pass over the tokens with a stack of open
/// parents. All binary operators share one precedence level; parentheses are
/// the only other grouping.
///
/// # Responsibilities
/// - Converts tokens into a [`crate::ast::Node`] tree.
/// - Reports unbalanced parentheses and operators missing an operand.
pub mod parser;
